//! Typed row mapping for the derived tier

use hemicycle_core::{Amendment, Bill, DebateSummary, Deputy, Vote};
use rusqlite::types::Value;
use rusqlite::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Real,
}

impl ColumnType {
    pub fn sql(self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnType,
}

const fn text(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnType::Text,
    }
}

const fn integer(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnType::Integer,
    }
}

/// A record stored as one row of a typed table; values follow `COLUMNS` order
pub trait TableRecord: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [Column];

    fn to_row(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

fn txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn json_list(items: &[String]) -> Value {
    Value::Text(serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string()))
}

fn parse_list(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse list JSON: {}", e),
            )),
        )
    })
}

impl TableRecord for Deputy {
    const TABLE: &'static str = "deputies";
    const COLUMNS: &'static [Column] = &[
        text("uid"),
        text("civility"),
        text("first_name"),
        text("last_name"),
        text("full_name"),
        text("gender"),
        text("birth_date"),
        text("birth_place"),
        text("profession"),
        text("department"),
        text("department_number"),
        text("constituency"),
        text("group_code"),
        text("group_label"),
    ];

    fn to_row(&self) -> Vec<Value> {
        vec![
            txt(&self.uid),
            txt(&self.civility),
            txt(&self.first_name),
            txt(&self.last_name),
            txt(&self.full_name),
            txt(&self.gender),
            txt(&self.birth_date),
            txt(&self.birth_place),
            txt(&self.profession),
            txt(&self.department),
            txt(&self.department_number),
            txt(&self.constituency),
            txt(&self.group_code),
            txt(&self.group_label),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Deputy {
            uid: row.get(0)?,
            civility: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            full_name: row.get(4)?,
            gender: row.get(5)?,
            birth_date: row.get(6)?,
            birth_place: row.get(7)?,
            profession: row.get(8)?,
            department: row.get(9)?,
            department_number: row.get(10)?,
            constituency: row.get(11)?,
            group_code: row.get(12)?,
            group_label: row.get(13)?,
        })
    }
}

impl TableRecord for Bill {
    const TABLE: &'static str = "bills";
    const COLUMNS: &'static [Column] = &[
        text("uid"),
        text("title"),
        text("procedure"),
        text("deposit_date"),
        text("status"),
        text("legislature"),
        text("page_url"),
    ];

    fn to_row(&self) -> Vec<Value> {
        vec![
            txt(&self.uid),
            txt(&self.title),
            txt(&self.procedure),
            txt(&self.deposit_date),
            txt(&self.status),
            txt(&self.legislature),
            txt(&self.page_url),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Bill {
            uid: row.get(0)?,
            title: row.get(1)?,
            procedure: row.get(2)?,
            deposit_date: row.get(3)?,
            status: row.get(4)?,
            legislature: row.get(5)?,
            page_url: row.get(6)?,
        })
    }
}

impl TableRecord for Vote {
    const TABLE: &'static str = "votes";
    const COLUMNS: &'static [Column] = &[
        text("uid"),
        integer("number"),
        text("date"),
        text("title"),
        text("outcome"),
        integer("voters"),
        integer("for_count"),
        integer("against_count"),
        integer("abstentions"),
        text("page_url"),
    ];

    fn to_row(&self) -> Vec<Value> {
        vec![
            txt(&self.uid),
            Value::Integer(self.number),
            txt(&self.date),
            txt(&self.title),
            txt(&self.outcome),
            Value::Integer(self.voters),
            Value::Integer(self.for_count),
            Value::Integer(self.against_count),
            Value::Integer(self.abstentions),
            txt(&self.page_url),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Vote {
            uid: row.get(0)?,
            number: row.get(1)?,
            date: row.get(2)?,
            title: row.get(3)?,
            outcome: row.get(4)?,
            voters: row.get(5)?,
            for_count: row.get(6)?,
            against_count: row.get(7)?,
            abstentions: row.get(8)?,
            page_url: row.get(9)?,
        })
    }
}

impl TableRecord for Amendment {
    const TABLE: &'static str = "amendments";
    const COLUMNS: &'static [Column] = &[
        text("uid"),
        text("number"),
        text("deposit_date"),
        text("author"),
        integer("cosignatories"),
        text("state_label"),
        text("state_code"),
        text("outcome_label"),
        text("outcome_code"),
        text("legislative_text_ref"),
        text("legislature"),
    ];

    fn to_row(&self) -> Vec<Value> {
        vec![
            txt(&self.uid),
            txt(&self.number),
            txt(&self.deposit_date),
            self.author.as_deref().map(txt).unwrap_or(Value::Null),
            Value::Integer(self.cosignatories),
            txt(&self.state_label),
            txt(&self.state_code),
            txt(&self.outcome_label),
            txt(&self.outcome_code),
            txt(&self.legislative_text_ref),
            txt(&self.legislature),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Amendment {
            uid: row.get(0)?,
            number: row.get(1)?,
            deposit_date: row.get(2)?,
            author: row.get(3)?,
            cosignatories: row.get(4)?,
            state_label: row.get(5)?,
            state_code: row.get(6)?,
            outcome_label: row.get(7)?,
            outcome_code: row.get(8)?,
            legislative_text_ref: row.get(9)?,
            legislature: row.get(10)?,
        })
    }
}

impl TableRecord for DebateSummary {
    const TABLE: &'static str = "debates";
    const COLUMNS: &'static [Column] = &[
        text("uid"),
        text("date"),
        text("session_number"),
        text("session"),
        text("agenda"),
        text("speakers"),
        integer("speaker_count"),
        integer("paragraph_count"),
        text("preview"),
    ];

    fn to_row(&self) -> Vec<Value> {
        vec![
            txt(&self.uid),
            txt(&self.date),
            txt(&self.session_number),
            txt(&self.session),
            json_list(&self.agenda),
            json_list(&self.speakers),
            Value::Integer(self.speaker_count),
            Value::Integer(self.paragraph_count),
            txt(&self.preview),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(DebateSummary {
            uid: row.get(0)?,
            date: row.get(1)?,
            session_number: row.get(2)?,
            session: row.get(3)?,
            agenda: parse_list(row, 4)?,
            speakers: parse_list(row, 5)?,
            speaker_count: row.get(6)?,
            paragraph_count: row.get(7)?,
            preview: row.get(8)?,
        })
    }
}
