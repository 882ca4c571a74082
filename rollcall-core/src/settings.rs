//! Endpoint settings populated during the configuration step.

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// The set of HTTP verbs an endpoint answers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Verbs: u8 {
        /// GET
        const GET = 1;
        /// POST
        const POST = 1 << 1;
        /// PUT
        const PUT = 1 << 2;
        /// PATCH
        const PATCH = 1 << 3;
        /// DELETE
        const DELETE = 1 << 4;
        /// HEAD
        const HEAD = 1 << 5;
        /// OPTIONS
        const OPTIONS = 1 << 6;
    }
}

/// Settings an endpoint populates during [`configure`].
///
/// The discovery engine treats the populated value as opaque: it is
/// snapshotted into the endpoint's registry definition and consumed as-is
/// by the routing layer. The chainable helpers below cover the common
/// cases:
///
/// ```rust,ignore
/// fn configure(&mut self) -> Result<(), BoxError> {
///     self.settings.post("/orders").roles(["clerk"]);
///     Ok(())
/// }
/// ```
///
/// [`configure`]: crate::Endpoint::configure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointSettings {
    routes: Vec<String>,
    verbs: Verbs,
    allow_anonymous: bool,
    roles: Vec<String>,
}

impl EndpointSettings {
    /// Create empty settings. Unusable until at least one route and one
    /// verb are configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route pattern answered with `GET`.
    pub fn get(&mut self, route: impl Into<String>) -> &mut Self {
        self.verbs |= Verbs::GET;
        self.routes.push(route.into());
        self
    }

    /// Add a route pattern answered with `POST`.
    pub fn post(&mut self, route: impl Into<String>) -> &mut Self {
        self.verbs |= Verbs::POST;
        self.routes.push(route.into());
        self
    }

    /// Add a route pattern answered with `PUT`.
    pub fn put(&mut self, route: impl Into<String>) -> &mut Self {
        self.verbs |= Verbs::PUT;
        self.routes.push(route.into());
        self
    }

    /// Add a route pattern answered with `DELETE`.
    pub fn delete(&mut self, route: impl Into<String>) -> &mut Self {
        self.verbs |= Verbs::DELETE;
        self.routes.push(route.into());
        self
    }

    /// Add route patterns without touching the verb set.
    pub fn routes<I, S>(&mut self, routes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.routes.extend(routes.into_iter().map(Into::into));
        self
    }

    /// Add to the set of permitted verbs.
    pub fn verbs(&mut self, verbs: Verbs) -> &mut Self {
        self.verbs |= verbs;
        self
    }

    /// Allow unauthenticated access to this endpoint.
    pub fn allow_anonymous(&mut self) -> &mut Self {
        self.allow_anonymous = true;
        self
    }

    /// Require any of the given roles.
    pub fn roles<I, S>(&mut self, roles: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    /// The configured route patterns.
    pub fn route_patterns(&self) -> &[String] {
        &self.routes
    }

    /// The configured verb set.
    pub fn permitted_verbs(&self) -> Verbs {
        self.verbs
    }

    /// Whether unauthenticated access is allowed.
    pub fn anonymous(&self) -> bool {
        self.allow_anonymous
    }

    /// Roles required to reach this endpoint.
    pub fn required_roles(&self) -> &[String] {
        &self.roles
    }

    /// Check that the settings describe a reachable endpoint.
    ///
    /// A configuration step that leaves no route or no verb has produced an
    /// unusable value; discovery surfaces this as a configuration error.
    pub fn validate(&self) -> Result<(), InvalidSettings> {
        if self.routes.is_empty() {
            return Err(InvalidSettings::NoRoutes);
        }
        if self.verbs.is_empty() {
            return Err(InvalidSettings::NoVerbs);
        }
        Ok(())
    }
}

/// Why a populated [`EndpointSettings`] value is unusable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSettings {
    /// The configuration step configured no route pattern.
    #[error("no route patterns configured")]
    NoRoutes,
    /// The configuration step configured no permitted verb.
    #[error("no permitted verbs configured")]
    NoVerbs,
}

#[cfg(test)]
mod tests {
    use super::{EndpointSettings, InvalidSettings, Verbs};

    #[test]
    fn verb_helpers_accumulate() {
        let mut settings = EndpointSettings::new();
        settings.get("/orders/{id}").post("/orders");

        assert_eq!(settings.permitted_verbs(), Verbs::GET | Verbs::POST);
        assert_eq!(settings.route_patterns(), ["/orders/{id}", "/orders"]);
    }

    #[test]
    fn empty_settings_are_unusable() {
        assert_eq!(
            EndpointSettings::new().validate(),
            Err(InvalidSettings::NoRoutes)
        );

        let mut routes_only = EndpointSettings::new();
        routes_only.routes(["/ping"]);
        assert_eq!(routes_only.validate(), Err(InvalidSettings::NoVerbs));
    }

    #[test]
    fn configured_settings_validate() {
        let mut settings = EndpointSettings::new();
        settings.delete("/orders/{id}").roles(["admin"]);
        assert!(settings.validate().is_ok());
        assert!(!settings.anonymous());
        assert_eq!(settings.required_roles(), ["admin"]);
    }
}
