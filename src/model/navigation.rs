//! Navigation Model
//!
//! Holds the single active page and which sidebar section is expanded.
//! Active/open flags for the sidebar are derived here once per frame and
//! handed to the renderer as [`SidebarEntry`] values.

use super::pages::PageId;

/// A sidebar section with its child pages
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub route: &'static str,
    pub pages: Vec<PageId>,
}

/// A child link as the renderer sees it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub title: &'static str,
    pub page: PageId,
    pub active: bool,
}

/// A section as the renderer sees it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    pub title: &'static str,
    /// Own route or a child route is the active page
    pub active: bool,
    /// Toggled open, or contains the active page
    pub open: bool,
    pub items: Vec<SidebarItem>,
}

fn default_sections() -> Vec<NavSection> {
    vec![
        NavSection {
            title: "Sellers",
            route: "/dashboard/sellers",
            pages: vec![PageId::Sellers],
        },
        NavSection {
            title: "Customers",
            route: "/dashboard/customers",
            pages: vec![PageId::Customers],
        },
        NavSection {
            title: "Products",
            route: "/dashboard/products",
            pages: vec![PageId::Products],
        },
        NavSection {
            title: "Reports",
            route: "/dashboard/reports",
            pages: vec![PageId::MonthlyReport],
        },
    ]
}

#[derive(Clone, Debug)]
pub struct NavigationModel {
    pub sections: Vec<NavSection>,

    /// The page currently shown
    pub active_page: PageId,

    /// Section expanded by hand (at most one)
    pub open_section: Option<&'static str>,
}

impl NavigationModel {
    pub fn new(active_page: PageId) -> Self {
        Self {
            sections: default_sections(),
            active_page,
            open_section: None,
        }
    }

    pub fn activate(&mut self, page: PageId) {
        self.active_page = page;
    }

    /// Expand the next section in order (after the last: none)
    pub fn cycle_open_section(&mut self) {
        let next = match self.open_section {
            None => self.sections.first(),
            Some(current) => self
                .sections
                .iter()
                .position(|s| s.title == current)
                .and_then(|idx| self.sections.get(idx + 1)),
        };
        self.open_section = next.map(|s| s.title);
    }

    pub fn is_section_active(&self, section: &NavSection) -> bool {
        section.route == self.active_page.route() || section.pages.contains(&self.active_page)
    }

    pub fn is_section_open(&self, section: &NavSection) -> bool {
        self.open_section == Some(section.title) || section.pages.contains(&self.active_page)
    }

    /// Sidebar entries with active/open flags resolved
    pub fn entries(&self) -> Vec<SidebarEntry> {
        self.sections
            .iter()
            .map(|section| SidebarEntry {
                title: section.title,
                active: self.is_section_active(section),
                open: self.is_section_open(section),
                items: section
                    .pages
                    .iter()
                    .map(|page| SidebarItem {
                        title: page.title(),
                        page: *page,
                        active: *page == self.active_page,
                    })
                    .collect(),
            })
            .collect()
    }
}
