use axum::response::Html;

use crate::web::render;

/// Notification toggles and their initial state. Changes are never persisted.
pub const NOTIFICATION_TOGGLES: [(&str, &str, bool); 3] = [
    ("email_notifications", "Email notifications", true),
    ("customer_updates", "Customer updates", true),
    ("system_alerts", "System alerts", false),
];

pub async fn show() -> Html<String> {
    Html(render_settings())
}

fn render_settings() -> String {
    let toggles: String = NOTIFICATION_TOGGLES
        .iter()
        .map(|(name, label, on)| {
            let checked = if *on { " checked" } else { "" };
            format!(
                r#"<label class="check"><span>{label}</span><input type="checkbox" name="{name}"{checked}></label>"#
            )
        })
        .collect();

    let content = format!(
        r#"{header}
<section class="card"><h2>Profile Settings</h2>
<label class="field"><div class="label"><span>Full Name</span></div><input type="text" placeholder="Your name"></label>
<label class="field"><div class="label"><span>Email</span></div><input type="email" placeholder="your.email@example.com"></label>
</section>
<section class="card"><h2>Notifications</h2>{toggles}</section>
<section class="card"><h2>Security</h2><button type="button" aria-label="Change password">Change Password</button></section>"#,
        header = render::page_header("Settings", "Manage your account and preferences"),
    );

    render::layout("Settings", "/settings", &content)
}
