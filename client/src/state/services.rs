//! Static service catalogue and landing-page tab selection.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

/// Identifier of a landing-page service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ServiceId {
    #[default]
    Voice,
    Copy,
    Followers,
    Players,
}

impl ServiceId {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Voice => "voice",
            ServiceId::Copy => "copy",
            ServiceId::Followers => "followers",
            ServiceId::Players => "players",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        SERVICES.iter().map(|s| s.id).find(|id| id.as_str() == key)
    }
}

/// Compiled-in metadata for one tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub id: ServiceId,
    pub title: &'static str,
    /// Short caption on the tab trigger.
    pub label: &'static str,
    /// Icon name understood by `components::icon`.
    pub icon: &'static str,
}

pub static SERVICES: [ServiceDescriptor; 4] = [
    ServiceDescriptor {
        id: ServiceId::Voice,
        title: "Voice chat without ID, free!",
        label: "Voice Chat",
        icon: "Mic",
    },
    ServiceDescriptor {
        id: ServiceId::Copy,
        title: "Copy Roblox places with scripts, free!",
        label: "Copy",
        icon: "Copy",
    },
    ServiceDescriptor {
        id: ServiceId::Followers,
        title: "Boost followers on your Roblox account, free!",
        label: "Followers",
        icon: "Users",
    },
    ServiceDescriptor {
        id: ServiceId::Players,
        title: "Boost players for your Roblox place, free!",
        label: "Players",
        icon: "UserPlus",
    },
];

pub fn descriptor(id: ServiceId) -> &'static ServiceDescriptor {
    match id {
        ServiceId::Voice => &SERVICES[0],
        ServiceId::Copy => &SERVICES[1],
        ServiceId::Followers => &SERVICES[2],
        ServiceId::Players => &SERVICES[3],
    }
}

/// Currently selected landing tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabState {
    pub selected: ServiceId,
}

impl TabState {
    pub fn select(&mut self, id: ServiceId) {
        self.selected = id;
    }

    /// Select by textual id. Unknown keys leave the selection unchanged.
    pub fn select_key(&mut self, key: &str) -> bool {
        match ServiceId::parse(key) {
            Some(id) => {
                self.selected = id;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, id: ServiceId) -> bool {
        self.selected == id
    }

    pub fn active(&self) -> &'static ServiceDescriptor {
        descriptor(self.selected)
    }
}
