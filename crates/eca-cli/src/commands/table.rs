//! Rule table inspection command.

use anyhow::Result;
use eca_automaton::RuleTable;
use serde::Serialize;

#[derive(Serialize)]
struct TableJson<'a> {
    rule: u8,
    binary: String,
    table: &'a RuleTable,
}

/// Print the eight neighborhood outputs of `rule`.
pub fn execute(rule: i64, json: bool) -> Result<()> {
    let table = RuleTable::build(rule)?;

    if json {
        let out = TableJson {
            rule: table.rule().value(),
            binary: table.rule().binary(),
            table: &table,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{table}");
    Ok(())
}
