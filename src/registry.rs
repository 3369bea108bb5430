//! Read-only view of the known users.
//!
//! Validators only need to walk user names, so they take any
//! [`UserRegistry`]. [`UserList`] is the in-memory implementation.

/// A collection of users that can be iterated by name.
///
/// Implementations must not be mutated while a validator is walking them;
/// hold a read lock or pass a snapshot.
pub trait UserRegistry {
    /// Names of every known user, in registry order.
    fn user_names(&self) -> impl Iterator<Item = &str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered list of users. Uniqueness of names is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserList {
    users: Vec<User>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user at the end of the list.
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for UserList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        UserList {
            users: iter.into_iter().map(User::new).collect(),
        }
    }
}

impl UserRegistry for UserList {
    fn user_names(&self) -> impl Iterator<Item = &str> {
        self.users.user_names()
    }
}

impl UserRegistry for [User] {
    fn user_names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(User::name)
    }
}

impl UserRegistry for Vec<User> {
    fn user_names(&self) -> impl Iterator<Item = &str> {
        self.as_slice().user_names()
    }
}

impl UserRegistry for [&str] {
    fn user_names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|name| &**name)
    }
}
