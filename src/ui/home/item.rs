//! Row model for one user in the directory list.

use std::fmt;

use crate::directory::{SortType, UserRecord};

use super::intent::HomeEvent;
use super::state::HomeState;

#[derive(Debug, Clone, PartialEq)]
pub struct HomeUserItem {
    user: UserRecord,
    sort_type: SortType,
}

impl HomeUserItem {
    pub fn new(user: UserRecord, sort_type: SortType) -> Self {
        Self { user, sort_type }
    }

    /// Items for every user in `state`, in list order.
    pub fn from_state(state: &HomeState) -> Vec<Self> {
        state
            .data
            .iter()
            .map(|user| Self::new(user.clone(), state.sort_type))
            .collect()
    }

    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    /// Birthday is only shown when the list is ordered by it.
    pub fn birthday(&self) -> Option<&str> {
        match self.sort_type {
            SortType::ByDate => Some(&self.user.birthday_day),
            SortType::ByName => None,
        }
    }

    /// Event the view forwards when the row is clicked.
    pub fn click(&self) -> HomeEvent {
        HomeEvent::UserItemClicked(self.user.clone())
    }
}

impl fmt::Display for HomeUserItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @{} ({})",
            self.user.name, self.user.user_tag, self.user.department
        )?;
        if let Some(birthday) = self.birthday() {
            write!(f, " {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserRecord {
        UserRecord {
            name: "Ada".to_string(),
            user_tag: "ada".to_string(),
            department: "Eng".to_string(),
            birthday_day: "12-10".to_string(),
        }
    }

    #[test]
    fn birthday_hidden_when_sorted_by_name() {
        let item = HomeUserItem::new(ada(), SortType::ByName);
        assert_eq!(item.birthday(), None);
        assert_eq!(item.to_string(), "Ada @ada (Eng)");
    }

    #[test]
    fn birthday_shown_when_sorted_by_date() {
        let item = HomeUserItem::new(ada(), SortType::ByDate);
        assert_eq!(item.birthday(), Some("12-10"));
        assert_eq!(item.to_string(), "Ada @ada (Eng) 12-10");
    }

    #[test]
    fn click_produces_user_item_clicked() {
        let item = HomeUserItem::new(ada(), SortType::ByName);
        assert_eq!(item.click(), HomeEvent::UserItemClicked(ada()));
    }

    #[test]
    fn items_follow_state_sort_type() {
        let state = HomeState {
            data: vec![ada()],
            sort_type: SortType::ByDate,
            ..HomeState::default()
        };
        let items = HomeUserItem::from_state(&state);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].birthday(), Some("12-10"));
    }
}
