use std::borrow::Borrow;

use indexmap::IndexMap;
use prettytable::{
    format::{FormatBuilder, LinePosition, LineSeparator, TableFormat},
    row, Cell, Table,
};
use reflink_sdk::{programs::anchor_lang::prelude::Pubkey, serde::StringPubkey};
use serde::Serialize;
use serde_json::{Map, Value};

/// Output format.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Table.
    #[default]
    Table,
    /// JSON.
    Json,
}

impl OutputFormat {
    /// Display a single serializable item.
    pub fn display_one(&self, item: impl Serialize) -> eyre::Result<String> {
        let map = to_map(item)?;
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(&map)?),
            Self::Table => Ok(display_table_one(&map)),
        }
    }

    /// Display keyed account.
    pub fn display_keyed_account(
        &self,
        pubkey: &Pubkey,
        account: impl Serialize,
    ) -> eyre::Result<String> {
        self.display_one(KeyedAccount {
            pubkey: (*pubkey).into(),
            account,
        })
    }

    /// Display keyed accounts.
    pub fn display_keyed_accounts(
        &self,
        accounts: impl IntoIterator<Item = (impl Borrow<Pubkey>, impl Serialize)>,
        options: DisplayOptions,
    ) -> eyre::Result<String> {
        let items = accounts
            .into_iter()
            .map(|(pubkey, account)| {
                let map = to_map(KeyedAccount {
                    pubkey: (*pubkey.borrow()).into(),
                    account,
                })?;
                Ok(self.project(map, &options))
            })
            .collect::<eyre::Result<Vec<_>>>()?;
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(&items)?),
            Self::Table => Ok(display_table_many(&items)),
        }
    }

    fn project(&self, map: Map<String, Value>, options: &DisplayOptions) -> Map<String, Value> {
        match (self, options.projection.as_ref()) {
            (Self::Table, Some(proj)) => proj
                .iter()
                .map(|(key, name)| (name.clone(), map.get(key).cloned().unwrap_or(Value::Null)))
                .collect(),
            _ => map,
        }
    }
}

/// Display options.
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    /// An ordered list of keys and their column names used by the table format.
    pub projection: Option<IndexMap<String, String>>,
}

impl DisplayOptions {
    /// Create a projection for table format.
    pub fn table_projection(
        keys: impl IntoIterator<Item = (impl ToString, impl ToString)>,
    ) -> Self {
        Self {
            projection: Some(
                keys.into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

#[derive(serde::Serialize)]
struct KeyedAccount<T> {
    pubkey: StringPubkey,
    #[serde(flatten)]
    account: T,
}

fn to_map(item: impl Serialize) -> eyre::Result<Map<String, Value>> {
    let Value::Object(map) = serde_json::to_value(item)? else {
        eyre::bail!("internal: only map-like structures are supported");
    };
    Ok(map)
}

fn display_table_many(items: &[Map<String, Value>]) -> String {
    let Some(first) = items.first() else {
        return "empty".to_string();
    };
    let mut table = Table::new();
    table.set_format(table_format());
    table.set_titles(first.keys().into());

    for item in items {
        table.add_row(item.values().map(json_value_to_cell).collect());
    }

    table.to_string()
}

fn display_table_one(item: &Map<String, Value>) -> String {
    let mut table = Table::new();
    table.set_format(table_format());
    table.set_titles(row!["Key", "Value"]);

    for (k, v) in item {
        table.add_row(row![k, json_value_to_cell(v)]);
    }

    table.to_string()
}

fn table_format() -> TableFormat {
    FormatBuilder::new()
        .padding(0, 2)
        .separator(LinePosition::Title, LineSeparator::new('-', '+', '+', '+'))
        .build()
}

fn json_value_to_cell(value: &Value) -> Cell {
    let content = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    Cell::new(&content)
}
