use crate::api::HrApi;
use crate::errors::AppError;
use crate::ui::Surface;
use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};

pub const NO_MATCH: &str = "No matching employee found.";
pub const LOOKUP_FAILED: &str = "Error fetching employee data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// `GET /employee/{id}`
    #[default]
    ById,
    /// `GET /employee/search/?name=`
    ByName,
}

/// Live lookup bound to a search input.
///
/// Every input change takes a ticket from a shared counter. A response is
/// rendered only if its ticket is still the latest one when it arrives, so
/// the list always reflects the most recently typed query no matter in which
/// order the backend answers.
#[derive(Debug)]
pub struct LiveSearch<'a> {
    api: &'a HrApi,
    mode: SearchMode,
    latest: AtomicU64,
}

impl<'a> LiveSearch<'a> {
    pub fn new(api: &'a HrApi, mode: SearchMode) -> Self {
        LiveSearch { api, mode, latest: AtomicU64::new(0) }
    }

    /// Handles one input change carrying the whole current value of the input.
    pub async fn on_input<S: Surface + ?Sized>(&self, raw: &str, view: &S) {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let query = raw.trim();
        if query.is_empty() {
            view.render_results(&[]);
            return;
        }

        let entries = match self.lookup(query).await {
            Ok(entries) if entries.is_empty() => vec![NO_MATCH.to_string()],
            Ok(entries) => entries,
            Err(err) => {
                error!("lookup for '{}' failed: {}", query, err);
                vec![LOOKUP_FAILED.to_string()]
            }
        };

        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!("discarding stale result for '{}' (ticket {})", query, ticket);
            return;
        }
        view.render_results(&entries);
    }

    async fn lookup(&self, query: &str) -> Result<Vec<String>, AppError> {
        match self.mode {
            SearchMode::ById => Ok(self
                .api
                .get_employee(query)
                .await?
                .map(|employee| employee.summary_line())
                .into_iter()
                .collect()),
            SearchMode::ByName => match self.api.search_by_name(query).await {
                Ok(employees) => Ok(employees.iter().map(|employee| employee.summary_line()).collect()),
                Err(AppError::Rejected { status, .. }) => {
                    debug!("name search for '{}' rejected with {}", query, status);
                    Ok(Vec::new())
                }
                Err(err) => Err(err),
            },
        }
    }
}
