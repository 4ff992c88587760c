use prettytable::{Cell, Row, Table};

/// Counters collected over one solve: propagation work plus search effort.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Search tree nodes entered.
    pub nodes_visited: u64,
    /// Candidate values abandoned after a failed branch.
    pub backtracks: u64,
    /// Calls to arc revision during AC-3.
    pub revisions: u64,
    /// Revisions that actually removed at least one word.
    pub prunings: u64,
    /// Wall-clock time for the whole solve.
    pub solve_time_micros: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    let rows: [(&str, String); 5] = [
        ("Nodes visited", stats.nodes_visited.to_string()),
        ("Backtracks", stats.backtracks.to_string()),
        ("Arc revisions", stats.revisions.to_string()),
        ("Domain prunings", stats.prunings.to_string()),
        (
            "Solve time (ms)",
            format!("{:.2}", stats.solve_time_micros as f64 / 1000.0),
        ),
    ];
    for (metric, value) in rows {
        table.add_row(Row::new(vec![Cell::new(metric), Cell::new(&value)]));
    }

    table.to_string()
}
