use axum::http::StatusCode;

use crate::form::{Notification, NotificationKind};

/// Sidebar entries: (label, path).
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("Dashboard", "/"),
    ("Create Customer", "/create-customer"),
    ("Settings", "/settings"),
];

const STYLE: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;display:flex;min-height:100vh}
aside{width:16rem;padding:1.5rem;border-right:1px solid #e5e7eb;display:flex;flex-direction:column}
aside nav{flex:1}
aside a{display:block;padding:.75rem 1rem;border-radius:.5rem;color:inherit;text-decoration:none}
aside a.active{background:#ef4444;color:#fff}
main{flex:1;padding:2rem}
.card{padding:1.5rem;border-radius:1rem;box-shadow:0 4px 12px rgba(0,0,0,.08);margin-bottom:1.5rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(22rem,1fr));gap:1.5rem}
.field{display:block;margin-bottom:1rem}
.field input,.field select{width:100%;padding:.6rem 1rem;border:1px solid #d1d5db;border-radius:.5rem}
.required{font-size:.75rem;color:#dc2626;float:right}
.field-error{margin-top:.35rem;font-size:.75rem;color:#dc2626}
.toast{position:fixed;top:1rem;right:1rem;padding:1rem 1.5rem;border-radius:.5rem;color:#fff}
.toast-success{background:#16a34a}.toast-error{background:#dc2626}.toast-info{background:#2563eb}
.actions{display:flex;justify-content:flex-end;gap:1rem}
"#;

/// Escapes text for use in HTML content and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn sidebar(active_path: &str) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(label, path)| {
            if *path == active_path {
                format!(r#"<a class="active" href="{path}" aria-current="page">{label}</a>"#)
            } else {
                format!(r#"<a href="{path}">{label}</a>"#)
            }
        })
        .collect();

    format!(
        r#"<aside>
<div><h1>Lux Cozi</h1><p>Customer Portal</p></div>
<nav>{links}</nav>
<p class="footer">&copy; 2024 LUX COZI. All rights reserved.</p>
</aside>"#
    )
}

/// Wraps page content in the document shell with the sidebar.
pub fn layout(title: &str, active_path: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Lux Cozi Customer Portal</title>
<style>{STYLE}</style>
</head>
<body>
{sidebar}
<main>
{content}
</main>
</body>
</html>"#,
        title = escape(title),
        sidebar = sidebar(active_path),
    )
}

pub fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<header><h1>{}</h1><p>{}</p></header>"#,
        escape(title),
        escape(subtitle)
    )
}

pub fn toast(notification: &Notification) -> String {
    let class = match notification.kind {
        NotificationKind::Success => "toast-success",
        NotificationKind::Error => "toast-error",
    };
    format!(
        r#"<div class="toast {class}" role="status">{}</div>"#,
        escape(&notification.message)
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        r#"{}<div class="card"><p>{}</p><p><a href="/">Back to dashboard</a></p></div>"#,
        page_header(title, &format!("HTTP {}", status.as_u16())),
        escape(message)
    );
    layout(title, "", &content)
}
