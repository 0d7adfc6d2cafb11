/// Role every whitelist row is rendered with.
pub const WHITELIST_ROLE: &str = "Whitelist";

/// Grant written for the whitelist role when the roles sheet does not define one.
pub const DEFAULT_WHITELIST_PERMISSION: &str = "reserve";

/// A named permission group and the grant string written after it (`Group=<name>:<value>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRole {
    pub name: String,
    pub value: String,
}

impl AdminRole {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single admin or whitelisted player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub steam64: String,
    pub role: Option<String>,
    pub notes: Option<String>,
}

impl User {
    /// Users without a steam64 id are kept around but never rendered.
    pub fn has_steam64(&self) -> bool {
        !self.steam64.is_empty()
    }
}

/// Insertion-ordered set of roles keyed by name.
///
/// Inserting a role whose name already exists keeps the original position and
/// takes the new value, so rendering order always follows the sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRoles(Vec<AdminRole>);

impl AdminRoles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: AdminRole) {
        match self.0.iter_mut().find(|existing| existing.name == role.name) {
            Some(existing) => existing.value = role.value,
            None => self.0.push(role),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AdminRole> {
        self.0.iter().find(|role| role.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the whitelist role, appending `Whitelist=reserve` first if it is missing.
    pub fn ensure_whitelist(&mut self) -> &AdminRole {
        let index = match self.0.iter().position(|role| role.name == WHITELIST_ROLE) {
            Some(index) => index,
            None => {
                self.0.push(AdminRole::new(
                    WHITELIST_ROLE,
                    DEFAULT_WHITELIST_PERMISSION,
                ));
                self.0.len() - 1
            }
        };
        &self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdminRole> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<AdminRole> for AdminRoles {
    fn from_iter<I: IntoIterator<Item = AdminRole>>(iter: I) -> Self {
        let mut roles = AdminRoles::new();
        roles.extend(iter);
        roles
    }
}

impl Extend<AdminRole> for AdminRoles {
    fn extend<I: IntoIterator<Item = AdminRole>>(&mut self, iter: I) {
        for role in iter {
            self.insert(role);
        }
    }
}

impl IntoIterator for AdminRoles {
    type Item = AdminRole;
    type IntoIter = std::vec::IntoIter<AdminRole>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Everything read from one spreadsheet, or the merge of several.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub roles: AdminRoles,
    pub admins: Vec<User>,
    pub whitelist: Vec<User>,
}

impl Roster {
    /// Appends another roster. Admins and whitelist entries are concatenated
    /// as-is (no deduplication); roles merge by name.
    pub fn merge(&mut self, other: Roster) {
        self.roles.extend(other.roles);
        self.admins.extend(other.admins);
        self.whitelist.extend(other.whitelist);
    }
}

impl FromIterator<Roster> for Roster {
    fn from_iter<I: IntoIterator<Item = Roster>>(iter: I) -> Self {
        iter.into_iter().fold(Roster::default(), |mut merged, roster| {
            merged.merge(roster);
            merged
        })
    }
}
