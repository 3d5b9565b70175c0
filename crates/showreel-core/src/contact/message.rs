use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::ContactSubmission;

/// Mail composed from a contact submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub date: DateTime<Utc>,
}

impl OutgoingMessage {
    pub fn compose(submission: &ContactSubmission, from: &str, to: &str, date: DateTime<Utc>) -> Self {
        let phone = submission.phone().unwrap_or("-");

        let text = format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\n{}",
            submission.name, submission.email, phone, submission.message
        );

        let html = format!(
            "<h2>New Contact</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Phone:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>\n",
            escape_html(&submission.name),
            escape_html(&submission.email),
            escape_html(phone),
            escape_html(&submission.message).replace('\n', "<br/>"),
        );

        Self {
            from: from.to_string(),
            to: to.to_string(),
            reply_to: submission.email.clone(),
            subject: format!("New Contact: {}", submission.name),
            text,
            html,
            date,
        }
    }
}

fn escape_html(input: &str) -> String {
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
