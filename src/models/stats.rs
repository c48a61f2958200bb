use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Employees,
    Documents,
}

impl Stat {
    pub fn count_element(self) -> &'static str {
        match self {
            Stat::Employees => "employee-count",
            Stat::Documents => "document-count",
        }
    }

    pub fn bar_element(self) -> &'static str {
        match self {
            Stat::Employees => "employee-bar",
            Stat::Documents => "document-bar",
        }
    }
}

/// Bar width in percent: ten points per item, capped at a full bar.
pub fn bar_width(count: u64) -> u8 {
    count.saturating_mul(10).min(100) as u8
}
