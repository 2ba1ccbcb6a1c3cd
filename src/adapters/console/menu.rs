//! Menu choices and the menu text shown before each prompt.

/// One entry of the main menu, numbered 1–11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMember,
    ListMembers,
    AddFeeRecord,
    ListFeeRecords,
    FindMemberByName,
    ChangeFeesById,
    ResetAllFees,
    SaveMemberCount,
    ShowMembersGraph,
    ChangeMembershipType,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [Self; 11] = [
        Self::AddMember,
        Self::ListMembers,
        Self::AddFeeRecord,
        Self::ListFeeRecords,
        Self::FindMemberByName,
        Self::ChangeFeesById,
        Self::ResetAllFees,
        Self::SaveMemberCount,
        Self::ShowMembersGraph,
        Self::ChangeMembershipType,
        Self::Exit,
    ];

    /// Parse the text typed at the menu prompt. Only the bare numbers
    /// "1" to "11" are accepted; no padding, signs or leading zeros.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| input == choice.number().to_string())
    }

    pub const fn number(self) -> usize {
        self as usize + 1
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AddMember => "Add a new member",
            Self::ListMembers => "Display all members",
            Self::AddFeeRecord => "Add fees payment record",
            Self::ListFeeRecords => "Display fees payment records",
            Self::FindMemberByName => "Find member by name",
            Self::ChangeFeesById => "Change fees by ID",
            Self::ResetAllFees => "Set all fees to 'no'",
            Self::SaveMemberCount => "Save member count and date",
            Self::ShowMembersGraph => "Create and display graph of members",
            Self::ChangeMembershipType => "Change membership type by ID",
            Self::Exit => "Exit",
        }
    }

    /// Whether the session pauses for Enter after this action.
    pub const fn pauses(self) -> bool {
        !matches!(
            self,
            Self::ShowMembersGraph | Self::ChangeMembershipType | Self::Exit
        )
    }
}

/// The menu block printed before every choice prompt.
pub fn menu_text() -> String {
    let mut text = String::from("\nMenu:\n");
    for choice in MenuChoice::ALL {
        text.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    text
}

/// Prompt shown after the menu block.
pub const CHOICE_PROMPT: &str = "Enter your choice (1/2/3/4/5/6/7/8/9/10/11): ";
