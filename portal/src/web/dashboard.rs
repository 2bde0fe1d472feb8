use axum::response::Html;

use crate::web::render;

/// Headline figures shown on the dashboard. Placeholder numbers, not live data.
pub const STATS: [(&str, &str, &str); 4] = [
    ("Total Customers", "1,234", "+12%"),
    ("Active Accounts", "892", "+8%"),
    ("Pending Approvals", "23", "-5%"),
    ("New This Month", "45", "+23%"),
];

pub async fn show() -> Html<String> {
    Html(render_dashboard())
}

fn render_dashboard() -> String {
    let stats: String = STATS
        .iter()
        .map(|(label, value, change)| {
            format!(
                r#"<div class="card stat"><span class="change">{change}</span><h3>{value}</h3><p>{label}</p></div>"#
            )
        })
        .collect();

    let activity: String = (1..=3)
        .map(|n| {
            format!(
                r#"<li><p>New customer created</p><p>Customer #{} was added to the system</p><span>{}h ago</span></li>"#,
                1000 + n,
                n
            )
        })
        .collect();

    let content = format!(
        r#"{header}
<div class="grid">{stats}</div>
<section class="card"><h2>Quick Actions</h2>
<a href="/create-customer"><h3>Create New Customer</h3><p>Add a customer and sync to SAP</p></a>
<div><h3>View All Customers</h3><p>Browse and manage customers</p></div>
</section>
<section class="card"><h2>Recent Activity</h2><ul>{activity}</ul></section>"#,
        header = render::page_header("Dashboard", "Welcome to LUX COZI Customer Portal"),
    );

    render::layout("Dashboard", "/", &content)
}
