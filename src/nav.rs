use crate::{
    content::{NAV_CTA, NAV_LINKS, NavLink},
    foundation::error::{StagecraftError, StagecraftResult},
};

/// Navigation bar state: which group is expanded and which route is current.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavMenu {
    links: &'static [NavLink],
    expanded: Option<usize>,
    route: String,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(&NAV_LINKS, "/")
    }
}

impl NavMenu {
    /// Menu over `links`, currently at `route`.
    pub fn new(links: &'static [NavLink], route: impl Into<String>) -> Self {
        Self {
            links,
            expanded: None,
            route: route.into(),
        }
    }

    /// Top-level links.
    pub fn links(&self) -> &'static [NavLink] {
        self.links
    }

    /// Highlighted call-to-action link.
    pub fn cta(&self) -> NavLink {
        NAV_CTA
    }

    /// Current route.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Index of the expanded group.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Children of the expanded group, or nothing.
    pub fn expanded_children(&self) -> &'static [NavLink] {
        self.expanded
            .and_then(|i| self.links.get(i))
            .map(|l| l.children)
            .unwrap_or_default()
    }

    /// Pointer entered link `index`: expand it when it is a group, collapse otherwise.
    pub fn hover(&mut self, index: usize) {
        self.expanded = self
            .links
            .get(index)
            .filter(|l| !l.children.is_empty())
            .map(|_| index);
    }

    /// Pointer left the menu.
    pub fn leave(&mut self) {
        self.expanded = None;
    }

    /// Click on link `index`: groups toggle, plain links navigate.
    ///
    /// Returns the new route when navigation happened.
    pub fn click(&mut self, index: usize) -> StagecraftResult<Option<&str>> {
        let links = self.links;
        let link = links.get(index).ok_or_else(|| {
            StagecraftError::validation(format!("nav link {index} out of range"))
        })?;
        if link.children.is_empty() {
            return Ok(Some(self.navigate(link.href)));
        }
        self.expanded = match self.expanded {
            Some(i) if i == index => None,
            _ => Some(index),
        };
        Ok(None)
    }

    /// Go to `href`, collapsing any open group.
    pub fn navigate(&mut self, href: &str) -> &str {
        if self.route != href {
            tracing::debug!(from = %self.route, to = href, "route change");
            self.route = href.to_owned();
        }
        self.expanded = None;
        &self.route
    }

    /// Return `true` when `link` should be highlighted for the current route.
    ///
    /// `/` matches exactly; other links also match their sub-routes.
    pub fn is_active(&self, link: &NavLink) -> bool {
        if link.href == "/" {
            return self.route == "/";
        }
        self.route == link.href
            || self
                .route
                .strip_prefix(link.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Index of the highlighted top-level link.
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|l| self.is_active(l))
    }
}

#[cfg(test)]
#[path = "../tests/unit/nav.rs"]
mod tests;
