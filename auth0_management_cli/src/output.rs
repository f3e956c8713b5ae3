use auth0_management::types::{LogEntry, Role, User};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "User ID")]
    #[serde(rename = "User ID")]
    user_id: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Logins")]
    #[serde(rename = "Logins")]
    logins: u64,
    #[tabled(rename = "Last Login")]
    #[serde(rename = "Last Login")]
    last_login: String,
}

#[derive(Tabled, Serialize)]
struct RoleRow {
    #[tabled(rename = "Role ID")]
    #[serde(rename = "Role ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct MemberRow {
    #[tabled(rename = "User ID")]
    #[serde(rename = "User ID")]
    user_id: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct LogRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    event_type: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    user: String,
    #[tabled(rename = "Client")]
    #[serde(rename = "Client")]
    client: String,
}

// -- Row builders --

fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            user_id: u.user_id.clone(),
            email: u.base.email.clone().unwrap_or_default(),
            name: u.base.name.clone().unwrap_or_default(),
            logins: u.logins_count.unwrap_or(0),
            last_login: format_timestamp(u.last_login),
        })
        .collect()
}

fn build_role_rows(roles: &[Role]) -> Vec<RoleRow> {
    roles
        .iter()
        .map(|r| RoleRow {
            id: r.id.clone(),
            name: r.base.name.clone().unwrap_or_default(),
            description: r.base.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_member_rows(members: &[(&str, Option<&str>, Option<&str>)]) -> Vec<MemberRow> {
    members
        .iter()
        .map(|(user_id, email, name)| MemberRow {
            user_id: user_id.to_string(),
            email: email.unwrap_or_default().to_string(),
            name: name.unwrap_or_default().to_string(),
        })
        .collect()
}

fn build_log_rows(logs: &[LogEntry]) -> Vec<LogRow> {
    logs.iter()
        .map(|l| LogRow {
            date: format_timestamp(l.date),
            event_type: l.event_type.clone().unwrap_or_default(),
            description: l.description.clone().unwrap_or_default(),
            user: l
                .user_name
                .clone()
                .or_else(|| l.user_id.clone())
                .unwrap_or_default(),
            client: l.client_name.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Printers --

fn print_rows<R: Tabled>(rows: Vec<R>, format: &OutputFormat) {
    let mut table = Table::new(rows);
    if let OutputFormat::Markdown = format {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

pub fn print_users(users: &[User], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&users),
        _ => print_rows(build_user_rows(users), format),
    }
}

pub fn print_roles(roles: &[Role], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&roles),
        _ => print_rows(build_role_rows(roles), format),
    }
}

pub fn print_members(members: &[(&str, Option<&str>, Option<&str>)], format: &OutputFormat) {
    let rows = build_member_rows(members);
    match format {
        OutputFormat::Json => print_json(&rows),
        _ => print_rows(rows, format),
    }
}

pub fn print_logs(logs: &[LogEntry], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&logs),
        _ => print_rows(build_log_rows(logs), format),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_users_fixture() -> Vec<User> {
        let json_str = include_str!("../../auth0_management/tests/fixtures/users_page.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["users"].clone()).unwrap()
    }

    fn load_logs_fixture() -> Vec<LogEntry> {
        let json_str = include_str!("../../auth0_management/tests/fixtures/logs_page.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["logs"].clone()).unwrap()
    }

    #[test]
    fn test_format_timestamp_missing() {
        assert_eq!(format_timestamp(None), "-");
    }

    #[test]
    fn test_build_user_rows_mapping() {
        let users = load_users_fixture();
        let rows = build_user_rows(&users);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.user_id, "auth0|64b7f1c2a9e3d5f6a7b8c9d0");
        assert_eq!(row.email, "jane.doe@example.com");
        assert_eq!(row.logins, 42);
        assert_eq!(row.last_login, "2024-03-02 08:12");

        assert_eq!(rows[1].last_login, "-");
    }

    #[test]
    fn test_build_log_rows_prefers_user_name() {
        let logs = load_logs_fixture();
        let rows = build_log_rows(&logs);
        assert_eq!(rows[0].user, "jane.doe@example.com");
        assert_eq!(rows[0].event_type, "s");
        assert_eq!(rows[0].date, "2024-03-15 10:15");
    }

    #[test]
    fn test_build_member_rows_fills_blanks() {
        let rows = build_member_rows(&[("auth0|1", None, Some("Alex"))]);
        assert_eq!(rows[0].email, "");
        assert_eq!(rows[0].name, "Alex");
    }

    #[test]
    fn test_markdown_table_has_header() {
        let rows = build_member_rows(&[("auth0|1", Some("a@example.com"), None)]);
        let mut table = Table::new(rows);
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.contains("| User ID"));
        assert!(rendered.contains("a@example.com"));
    }
}
