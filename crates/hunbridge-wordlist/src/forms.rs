// Expanded word forms
//
// Every dictionary root is expanded with the prefix and suffix rules its
// flags allow. Cross-product classes combine: a root flagged with both a
// cross-product prefix and a cross-product suffix also yields the
// prefixed+suffixed forms.

use hashbrown::HashMap;

use crate::aff::{AffixClass, AffixData, AffixKind};
use crate::dic::DicEntry;

/// How a surface form was derived from a dictionary root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub root: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Derivation {
    fn root(root: &str) -> Self {
        Self {
            root: root.to_string(),
            prefix: None,
            suffix: None,
        }
    }

    /// Morphological description: ` st:<root>` then ` fl:<flag>` for each
    /// applied affix.
    pub fn describe(&self) -> String {
        let mut out = format!(" st:{}", self.root);
        for flag in [&self.prefix, &self.suffix].into_iter().flatten() {
            out.push_str(" fl:");
            out.push_str(flag);
        }
        out
    }
}

/// Map from every surface form to the derivations producing it.
#[derive(Debug, Default)]
pub struct WordForms {
    forms: HashMap<String, Vec<Derivation>>,
}

impl WordForms {
    pub fn build(entries: &[DicEntry], affix: &AffixData) -> Self {
        let mut forms = WordForms::default();

        for entry in entries {
            forms.insert(entry.word.clone(), Derivation::root(&entry.word));

            let classes: Vec<(&String, &AffixClass)> = entry
                .flags
                .iter()
                .filter_map(|flag| affix.classes.get(flag).map(|class| (flag, class)))
                .collect();

            let mut suffixed = Vec::new();
            for &(flag, class) in classes.iter().filter(|(_, c)| c.kind == AffixKind::Suffix) {
                for rule in &class.rules {
                    if let Some(form) = rule.apply(AffixKind::Suffix, &entry.word) {
                        if class.cross_product {
                            suffixed.push((form.clone(), flag));
                        }
                        forms.insert(
                            form,
                            Derivation {
                                suffix: Some(flag.clone()),
                                ..Derivation::root(&entry.word)
                            },
                        );
                    }
                }
            }

            for &(flag, class) in classes.iter().filter(|(_, c)| c.kind == AffixKind::Prefix) {
                for rule in &class.rules {
                    if let Some(form) = rule.apply(AffixKind::Prefix, &entry.word) {
                        forms.insert(
                            form,
                            Derivation {
                                prefix: Some(flag.clone()),
                                ..Derivation::root(&entry.word)
                            },
                        );
                    }
                    if !class.cross_product {
                        continue;
                    }
                    for (base, suffix_flag) in &suffixed {
                        if let Some(form) = rule.apply(AffixKind::Prefix, base) {
                            forms.insert(
                                form,
                                Derivation {
                                    root: entry.word.clone(),
                                    prefix: Some(flag.clone()),
                                    suffix: Some((*suffix_flag).clone()),
                                },
                            );
                        }
                    }
                }
            }
        }

        forms
    }

    fn insert(&mut self, form: String, derivation: Derivation) {
        let derivations = self.forms.entry(form).or_default();
        if !derivations.contains(&derivation) {
            derivations.push(derivation);
        }
    }

    pub fn get(&self, form: &str) -> Option<&[Derivation]> {
        self.forms.get(form).map(Vec::as_slice)
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains_key(form)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }
}
