//! Pure data -> view-model functions. Nothing here touches the DOM; the
//! components in [`crate::components`] turn these values into markup.

use crate::banner::Banner;
use crate::board::ListState;
use crate::model::{Activities, Activity};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "None yet";

/// One removable roster entry. Carries everything the unsubscribe call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Never negative; an over-full roster shows zero.
    pub spots_left: u32,
    pub participants: Vec<ParticipantRow>,
}

impl CardView {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}

pub fn render_card(activity: &Activity) -> CardView {
    CardView {
        name: activity.name.clone(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: u32::try_from(activity.spots_left().max(0)).unwrap_or(u32::MAX),
        participants: activity
            .participants
            .iter()
            .map(|email| ParticipantRow {
                email: email.clone(),
                activity: activity.name.clone(),
            })
            .collect(),
    }
}

pub fn render_cards(activities: &Activities) -> Vec<CardView> {
    activities.iter().map(render_card).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Notice(&'static str),
    Cards(Vec<CardView>),
}

pub fn render_list(list: &ListState) -> ListView {
    match list {
        ListState::Loading => ListView::Notice(LOADING_TEXT),
        ListState::Failed => ListView::Notice(LOAD_FAILED_TEXT),
        ListState::Ready(activities) => ListView::Cards(render_cards(activities)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub class: String,
    pub text: String,
}

/// `class` is the message kind plus `hidden` when not visible, matching the
/// page stylesheet.
pub fn render_banner(banner: &Banner) -> BannerView {
    let (kind, text) = match banner.message() {
        Some(m) => (Some(m.kind.class()), m.text.clone()),
        None => (None, String::new()),
    };
    let class = match (kind, banner.is_visible()) {
        (Some(k), true) => k.to_string(),
        (Some(k), false) => format!("{k} hidden"),
        (None, _) => "hidden".to_string(),
    };
    BannerView { class, text }
}
