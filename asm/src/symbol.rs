use arch::reg::{PREDEFINED, VAR_BASE};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kind: Kind,
    pub value: u16,
    /// 0-based index of the line that introduced the symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Symbol name to address, in insertion order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    map: IndexMap<String, Entry>,
    next_var: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let map = PREDEFINED
            .iter()
            .map(|(name, value)| {
                let entry = Entry {
                    kind: Kind::Predefined,
                    value: *value,
                    line: None,
                };
                (name.to_string(), entry)
            })
            .collect();
        SymbolTable {
            map,
            next_var: VAR_BASE,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn bind_label(&mut self, name: &str, value: u16, line: usize) -> Result<(), Error> {
        if self.contains(name) {
            return Err(Error::DuplicateLabel(name.to_string()));
        }
        debug!("label {} = {}", name, value);
        self.map.insert(
            name.to_string(),
            Entry {
                kind: Kind::Label,
                value,
                line: Some(line),
            },
        );
        Ok(())
    }

    /// Binds `name` to the next free RAM address. Does not check whether
    /// `name` is already bound.
    pub fn bind_variable(&mut self, name: &str, line: usize) -> Result<u16, Error> {
        let value = self.next_var;
        if value > arch::inst::ADDR_MAX {
            return Err(Error::AddressOutOfRange(name.to_string()));
        }
        self.next_var += 1;
        debug!("variable {} = {}", name, value);
        self.map.insert(
            name.to_string(),
            Entry {
                kind: Kind::Variable,
                value,
                line: Some(line),
            },
        );
        Ok(value)
    }

    pub fn resolve(&self, name: &str) -> Result<u16, Error> {
        self.get(name)
            .map(|entry| entry.value)
            .ok_or_else(|| Error::UndefinedSymbol(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.map.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.map.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn user_symbols(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.iter().filter(|(_, entry)| entry.kind != Kind::Predefined)
    }

    /// YAML rendering of the table, `name: {kind, value, line}`.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.map)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
