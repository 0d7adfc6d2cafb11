use chrono::NaiveDateTime;

use super::{
    roster::{Roster, User},
    supplemental::SupplementalSection,
};

/// The Squad server only reads CRLF-terminated admin files.
pub const NEWLINE: &str = "\r\n";
pub const ADMINS_FILE_NAME: &str = "Admins.cfg";
pub const GENERATED_AT_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

const HEADER: &str =
    "// THIS FILE SHOULD NOT BE MODIFIED MANUALLY. IT IS MANAGED VIA A SCHEDULED TASK AND GOOGLE SHEETS";

fn push_banner(out: &mut String, title: &str) {
    out.push_str(NEWLINE);
    out.push_str(NEWLINE);
    out.push_str(&format!("// {} --------------{}", title, NEWLINE));
}

fn push_users(out: &mut String, users: &[User]) {
    for user in users.iter().filter(|user| user.has_steam64()) {
        out.push_str(&format!(
            "Admin={}:{}\t\t//{}",
            user.steam64,
            user.role.as_deref().unwrap_or_default(),
            user.name
        ));
        if let Some(notes) = &user.notes {
            out.push_str(&format!(" - {}", notes));
        }
        out.push_str(NEWLINE);
    }
}

/// Renders the full `Admins.cfg` contents.
///
/// Output depends only on the arguments: the same roster, supplements and
/// timestamp always produce the same bytes.
pub fn render_admins_file(
    roster: &Roster,
    supplements: &[SupplementalSection],
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();

    out.push_str(HEADER);
    out.push_str(NEWLINE);
    out.push_str(&format!(
        "// last generated {}",
        generated_at.format(GENERATED_AT_FORMAT)
    ));

    push_banner(&mut out, "ADMIN ROLES");
    for role in roster.roles.iter() {
        out.push_str(&format!("Group={}:{}{}", role.name, role.value, NEWLINE));
    }

    push_banner(&mut out, "ADMINS");
    push_users(&mut out, &roster.admins);

    push_banner(&mut out, "WHITELIST");
    push_users(&mut out, &roster.whitelist);

    for supplement in supplements {
        out.push_str(NEWLINE);
        out.push_str(NEWLINE);
        out.push_str(&supplement.body);
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::roster::{AdminRole, AdminRoles};

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 5)
            .and_then(|date| date.and_hms_opt(14, 3, 9))
            .unwrap()
    }

    fn user(name: &str, steam64: &str, role: &str, notes: Option<&str>) -> User {
        User {
            name: name.to_string(),
            steam64: steam64.to_string(),
            role: Some(role.to_string()),
            notes: notes.map(str::to_string),
        }
    }

    fn roster() -> Roster {
        let mut roles: AdminRoles = vec![
            AdminRole::new("Admin", "changemap,kick,ban"),
            AdminRole::new("Moderator", "chat"),
        ]
        .into_iter()
        .collect();
        roles.ensure_whitelist();

        Roster {
            roles,
            admins: vec![
                user("Viking", "76561198000000001", "Admin", Some("head admin")),
                user("Newbie", "", "Moderator", None),
                user("Raven", "76561198000000002", "Moderator", None),
            ],
            whitelist: vec![
                user("Friend", "76561198000000003", "Whitelist", None),
                user("Unknown", "", "Whitelist", Some("ask for id")),
            ],
        }
    }

    #[test]
    fn test_render_full_file() {
        let expected = concat!(
            "// THIS FILE SHOULD NOT BE MODIFIED MANUALLY. IT IS MANAGED VIA A SCHEDULED TASK AND GOOGLE SHEETS\r\n",
            "// last generated Mon Oct  5 14:03:09 2026\r\n",
            "\r\n",
            "// ADMIN ROLES --------------\r\n",
            "Group=Admin:changemap,kick,ban\r\n",
            "Group=Moderator:chat\r\n",
            "Group=Whitelist:reserve\r\n",
            "\r\n",
            "\r\n",
            "// ADMINS --------------\r\n",
            "Admin=76561198000000001:Admin\t\t//Viking - head admin\r\n",
            "Admin=76561198000000002:Moderator\t\t//Raven\r\n",
            "\r\n",
            "\r\n",
            "// WHITELIST --------------\r\n",
            "Admin=76561198000000003:Whitelist\t\t//Friend\r\n",
        );

        assert_eq!(render_admins_file(&roster(), &[], generated_at()), expected);
    }

    #[test]
    fn test_users_without_steam64_are_not_rendered() {
        let rendered = render_admins_file(&roster(), &[], generated_at());
        assert!(!rendered.contains("Newbie"));
        assert!(!rendered.contains("Unknown"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render_admins_file(&roster(), &[], generated_at());
        let second = render_admins_file(&roster(), &[], generated_at());
        assert_eq!(first, second);
    }

    #[test]
    fn test_supplements_are_appended_after_whitelist() {
        let supplements = vec![
            SupplementalSection::verbatim("asc", "// ASC\r\nAdmin=76561198000000009:Whitelist"),
            SupplementalSection::without_groups("doc", "Group=Other:reserve"),
        ];

        let rendered = render_admins_file(&roster(), &supplements, generated_at());

        assert!(rendered.ends_with(
            "//Friend\r\n\r\n\r\n// ASC\r\nAdmin=76561198000000009:Whitelist\r\n\r\n// Group=Other:reserve"
        ));
    }

    #[test]
    fn test_empty_roster_still_has_all_sections() {
        let rendered = render_admins_file(&Roster::default(), &[], generated_at());
        assert!(rendered.contains("// ADMIN ROLES --------------\r\n"));
        assert!(rendered.contains("// ADMINS --------------\r\n"));
        assert!(rendered.ends_with("// WHITELIST --------------\r\n"));
    }

    #[test]
    fn test_admin_without_role_renders_empty_role() {
        let roster = Roster {
            admins: vec![User {
                name: "Viking".to_string(),
                steam64: "1".to_string(),
                role: None,
                notes: None,
            }],
            ..Roster::default()
        };
        let rendered = render_admins_file(&roster, &[], generated_at());
        assert!(rendered.contains("Admin=1:\t\t//Viking\r\n"));
    }
}
