use std::fmt;

/// Las cuatro pestañas de la barra de navegacion, en el orden en que se muestran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Map,
    Alerts,
    Tips,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Map, Tab::Alerts, Tab::Tips, Tab::Profile];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Map => "map",
            Tab::Alerts => "alerts",
            Tab::Tips => "tips",
            Tab::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::Alerts => "Alerts",
            Tab::Tips => "Tips",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Map => "📍",
            Tab::Alerts => "🔔",
            Tab::Tips => "🛡",
            Tab::Profile => "👤",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Un boton de la barra de navegacion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabEntry {
    pub tab: Tab,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// La barra no guarda estado propio: solo refleja la pestaña activa que le pasan.
pub fn tab_entries(active_tab: Tab) -> [TabEntry; 4] {
    Tab::ALL.map(|tab| TabEntry {
        tab,
        label: tab.label(),
        icon: tab.icon(),
        active: tab == active_tab,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_are_ordered() {
        let ids: Vec<&str> = Tab::ALL.iter().map(|tab| tab.id()).collect();
        assert_eq!(ids, vec!["map", "alerts", "tips", "profile"]);
        assert_eq!(Tab::default(), Tab::Map);
    }

    #[test]
    fn test_only_active_tab_is_highlighted() {
        let entries = tab_entries(Tab::Tips);
        let active: Vec<Tab> = entries.iter().filter(|e| e.active).map(|e| e.tab).collect();

        assert_eq!(active, vec![Tab::Tips]);
        assert_eq!(entries[1].label, "Alerts");
    }
}
