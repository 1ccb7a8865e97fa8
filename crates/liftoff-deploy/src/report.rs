//! Aggregate reporting for a deployment run.
//!
//! Pure presentation: nothing here affects control flow.

use liftoff_core::{DeploymentResult, RunSummary};

/// Derive aggregate counts from a result set.
pub fn summarize(results: &[DeploymentResult]) -> RunSummary {
    let successful = results.iter().filter(|r| r.success).count();
    RunSummary {
        total: results.len(),
        successful,
        failed: results.len() - successful,
    }
}

/// Render the human-readable run report: totals first, then one line per
/// catalog entry with its URL or a failure marker.
pub fn format_report(results: &[DeploymentResult]) -> String {
    let summary = summarize(results);
    let mut out = String::new();

    out.push_str("\nDeployment summary\n");
    out.push_str("==================\n");
    out.push_str(&format!("  Total:      {}\n", summary.total));
    out.push_str(&format!("  Successful: {}\n", summary.successful));
    out.push_str(&format!("  Failed:     {}\n", summary.failed));

    out.push_str("\nService URLs:\n");
    for result in results {
        if result.success {
            out.push_str(&format!("  ✓ {}: {}\n", result.name, result.url));
        } else {
            out.push_str(&format!("  ✗ {}: deployment failed\n", result.name));
        }
    }

    out
}
