//! Dashboard sidebar
//!
//! Role-specific menu rendered next to every authorized dashboard view.

use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub href: String,
    pub badge: Option<String>,
}

impl MenuItem {
    fn new(title: &'static str, href: impl Into<String>) -> Self {
        Self {
            title,
            href: href.into(),
            badge: None,
        }
    }

    /// Section segment of the href, `None` for the dashboard root
    pub fn section(&self) -> Option<&str> {
        self.href.trim_start_matches('/').split_once('/').map(|(_, section)| section)
    }
}

const STUDENT_SECTIONS: &[(&str, &str)] = &[
    ("My Courses", "courses"),
    ("Assignments", "assignments"),
    ("Grades", "grades"),
    ("Schedule", "schedule"),
    ("Messages", "messages"),
];

const TEACHER_SECTIONS: &[(&str, &str)] = &[
    ("My Courses", "courses"),
    ("Students", "students"),
    ("Assignments", "assignments"),
    ("Grading", "grading"),
    ("Create Content", "create"),
    ("Messages", "messages"),
];

const PARENT_SECTIONS: &[(&str, &str)] = &[
    ("Children Progress", "progress"),
    ("Courses", "courses"),
    ("Attendance", "attendance"),
    ("Messages", "messages"),
    ("Schedule", "schedule"),
];

const ADMIN_SECTIONS: &[(&str, &str)] = &[
    ("User Management", "users"),
    ("Course Management", "courses"),
    ("Analytics", "analytics"),
    ("Content Management", "content"),
    ("Notifications", "notifications"),
    ("System Settings", "settings"),
];

/// Menu for a role: the dashboard root first, then the role's sections
pub fn menu_items(role: Role) -> Vec<MenuItem> {
    let sections = match role {
        Role::Student => STUDENT_SECTIONS,
        Role::Teacher => TEACHER_SECTIONS,
        Role::Parent => PARENT_SECTIONS,
        Role::Admin => ADMIN_SECTIONS,
    };

    let root = role.dashboard_path();
    std::iter::once(MenuItem::new("Dashboard", root))
        .chain(
            sections
                .iter()
                .map(|(title, section)| MenuItem::new(title, format!("{}/{}", root, section))),
        )
        .collect()
}

/// Whether `section` is one of the role's menu sections
pub fn has_section(role: Role, section: &str) -> bool {
    menu_items(role).iter().any(|item| item.section() == Some(section))
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    items: Vec<MenuItem>,
    active_path: String,
    collapsed: bool,
}

impl Sidebar {
    pub fn new(role: Role, active_path: impl Into<String>) -> Self {
        Self {
            items: menu_items(role),
            active_path: active_path.into(),
            collapsed: false,
        }
    }

    /// Put the unread message count on the Messages entry; zero clears it
    pub fn with_unread_messages(mut self, unread: usize) -> Self {
        for item in self.items.iter_mut().filter(|i| i.section() == Some("messages")) {
            item.badge = (unread > 0).then(|| unread.to_string());
        }
        self
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Exact path match only
    pub fn is_active(&self, item: &MenuItem) -> bool {
        item.href == self.active_path
    }

    pub fn active_item(&self) -> Option<&MenuItem> {
        self.items.iter().find(|item| self.is_active(item))
    }

    /// Text rendering; a collapsed sidebar shows only markers
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.collapsed {
            out.push_str("EduLMS\n");
        }

        for item in &self.items {
            let marker = if self.is_active(item) { ">" } else { " " };
            if self.collapsed {
                out.push_str(&format!("{} *\n", marker));
                continue;
            }
            match &item.badge {
                Some(badge) => out.push_str(&format!("{} {} [{}]  {}\n", marker, item.title, badge, item.href)),
                None => out.push_str(&format!("{} {}  {}\n", marker, item.title, item.href)),
            }
        }
        out
    }
}
