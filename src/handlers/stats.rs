use crate::api::HrApi;
use crate::errors::AppError;
use crate::models::stats::{bar_width, Stat};
use crate::ui::Surface;
use log::{error, info, warn};

const REJECTED: &str = "Failed to load dashboard stats.";
const FAILED: &str = "Error loading dashboard stats.";

/// Page-load handler of the dashboard. Both counts are fetched concurrently
/// and shown together; if either one fails nothing is updated and a single
/// alert is raised.
pub async fn load_dashboard<S: Surface + ?Sized>(api: &HrApi, view: &S) -> Result<(), AppError> {
    let present = [Stat::Employees, Stat::Documents].iter().all(|stat| {
        view.has_element(stat.count_element()) && view.has_element(stat.bar_element())
    });
    if !present {
        return Ok(());
    }

    let (employees, documents) =
        futures_util::join!(api.count(Stat::Employees), api.count(Stat::Documents));

    let counts = match (employees, documents) {
        (Ok(employees), Ok(documents)) => [(Stat::Employees, employees), (Stat::Documents, documents)],
        (Err(err), _) | (_, Err(err)) => {
            let message = match &err {
                AppError::Rejected { status, .. } => {
                    warn!("stats request rejected with {}", status);
                    REJECTED
                }
                other => {
                    error!("failed to load dashboard stats: {}", other);
                    FAILED
                }
            };
            view.alert(message);
            return Err(err);
        }
    };

    for (stat, count) in counts {
        view.set_text(stat.count_element(), &count.to_string());
        view.set_width(stat.bar_element(), bar_width(count));
    }
    info!("dashboard loaded: {} employees, {} documents", counts[0].1, counts[1].1);
    Ok(())
}
