//! 菜单选项

/// A choice from the options menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Show,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Show,
        MenuChoice::Quit,
    ];

    /// Parse the raw line typed at the prompt. Matching is exact: " 1" is not "1".
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Delete),
            "3" => Some(MenuChoice::Show),
            "4" => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            MenuChoice::Add => '1',
            MenuChoice::Delete => '2',
            MenuChoice::Show => '3',
            MenuChoice::Quit => '4',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Task",
            MenuChoice::Delete => "Delete Task",
            MenuChoice::Show => "Show Tasks",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// 渲染选项列表（前面带一个空行）
pub fn render_options() -> String {
    let mut out = String::from("\nOptions:\n");
    for choice in MenuChoice::ALL {
        out.push_str(&format!("{}. {}\n", choice.key(), choice.label()));
    }
    out
}
