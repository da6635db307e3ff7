//! Help command handler

/// Handle /help command
pub fn handle_help() -> String {
    "EduLMS Help\n\n\
        /login <email> [password] - Sign in\n\
        /register <email> <name...> [--role <role>] - Create an account\n\
        /logout - Sign out\n\
        /whoami - Show the signed-in account\n\
        /open <path> - Open a page, e.g. /open /courses or /open /student/grades\n\
        /courses [subject] - Browse the catalog\n\
        /sidebar - Collapse or expand the dashboard sidebar\n\
        /help - Show this help message\n\
        /quit - Exit"
        .to_string()
}
