//! Integration descriptors: the static records describing one third-party
//! service each.
//!
//! A descriptor is declared tersely (usually just a name) and fully resolved
//! at build time: every optional field not supplied is derived from `name`
//! using a fixed template. The resolved [`Integration`] is immutable; `name`
//! is the unique registry key and the seed for every derived default.

use std::path::Path;

use serde::Serialize;

use crate::config::Settings;
use crate::registry::RegistryError;

/// A fully resolved integration descriptor.
///
/// Shared fields live here; kind-specific fields live in the
/// [`IntegrationKind`] payload. Construct via [`IntegrationDef`].
#[derive(Debug, Clone, Serialize)]
pub struct Integration {
    /// Unique slug key. Immutable; all defaults derive from it.
    pub name: String,
    /// Identifier used for API client registration.
    pub client_name: String,
    /// Logo asset path (SVG preferred, PNG fallback).
    pub logo: String,
    /// Optional annotation shown next to the display name in the UI.
    pub secondary_line_text: Option<String>,
    /// Human-readable label.
    pub display_name: String,
    /// Path to a markdown documentation fragment, if any.
    pub doc: Option<String>,
    /// Default channel suggested for this integration.
    pub stream_name: String,
    /// Kind-specific payload.
    pub kind: IntegrationKind,
}

/// Kind-specific descriptor payload.
#[derive(Debug, Clone, Serialize)]
pub enum IntegrationKind {
    /// Plugin/script integration with no inbound endpoint.
    Basic,
    /// Like `Basic`, but enabled only when the outbound email gateway is
    /// configured.
    Email,
    /// Integration with an inbound webhook endpoint.
    Webhook(WebhookSpec),
    /// Hubot-script bot integration (no endpoint of its own).
    Lozenge(LozengeSpec),
}

/// Webhook-specific fields.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookSpec {
    /// Handler slug resolved through a
    /// [`HandlerResolver`](crate::routes::HandlerResolver) at route build.
    pub handler: String,
    /// Inbound URL pattern.
    pub url: String,
    /// False for the shared-route variant: the descriptor stays in the
    /// registry for documentation, but another descriptor already serves
    /// its URL, so it must not produce a route.
    pub owns_route: bool,
}

/// Hubot-lozenge-specific fields.
#[derive(Debug, Clone, Serialize)]
pub struct LozengeSpec {
    /// Accessible alt text for the logo.
    pub logo_alt: String,
    /// Source location of the hubot script.
    pub git_url: String,
}

impl Integration {
    /// Whether this integration should be offered at all.
    ///
    /// Email depends on the configured outbound gateway address; every
    /// other kind is enabled unconditionally.
    pub fn is_enabled(&self, settings: &Settings) -> bool {
        match self.kind {
            IntegrationKind::Email => !settings.email_gateway_bot.is_empty(),
            _ => true,
        }
    }

    /// The webhook payload, if this descriptor is a webhook.
    pub fn webhook(&self) -> Option<&WebhookSpec> {
        match &self.kind {
            IntegrationKind::Webhook(spec) => Some(spec),
            _ => None,
        }
    }

    /// The lozenge payload, if this descriptor is a hubot lozenge.
    pub fn lozenge(&self) -> Option<&LozengeSpec> {
        match &self.kind {
            IntegrationKind::Lozenge(spec) => Some(spec),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindDef {
    Basic,
    Email,
    Webhook,
    Lozenge,
}

/// Declarative form of an integration, before default resolution.
///
/// Only `name` is required. `build` resolves every unset field from `name`
/// using the fixed templates documented on each setter.
#[derive(Debug, Clone)]
pub struct IntegrationDef {
    name: String,
    kind: KindDef,
    client_name: Option<String>,
    logo: Option<String>,
    secondary_line_text: Option<String>,
    display_name: Option<String>,
    doc: Option<String>,
    stream_name: Option<String>,
    handler: Option<String>,
    url: Option<String>,
    owns_route: bool,
    logo_alt: Option<String>,
    git_url: Option<String>,
}

impl IntegrationDef {
    fn new(name: &str, kind: KindDef) -> Self {
        Self {
            name: name.to_string(),
            kind,
            client_name: None,
            logo: None,
            secondary_line_text: None,
            display_name: None,
            doc: None,
            stream_name: None,
            handler: None,
            url: None,
            owns_route: true,
            logo_alt: None,
            git_url: None,
        }
    }

    /// A plugin/script integration with no inbound endpoint.
    pub fn basic(name: &str) -> Self {
        Self::new(name, KindDef::Basic)
    }

    /// The email gateway integration (gated on configuration).
    pub fn email(name: &str) -> Self {
        Self::new(name, KindDef::Email)
    }

    /// An integration with an inbound webhook endpoint.
    pub fn webhook(name: &str) -> Self {
        Self::new(name, KindDef::Webhook)
    }

    /// A hubot-script bot integration.
    pub fn lozenge(name: &str) -> Self {
        Self::new(name, KindDef::Lozenge)
    }

    /// Override the API client identifier. Default: `name` for most kinds,
    /// `Relay{TitleCasedName}Webhook` for webhooks.
    pub fn with_client_name(mut self, client_name: &str) -> Self {
        self.client_name = Some(client_name.to_string());
        self
    }

    /// Override the logo asset path. Default: prefer
    /// `images/integrations/logos/{name}.svg` when that file exists under
    /// the asset root, else `images/integrations/logos/{name}.png`.
    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo = Some(logo.to_string());
        self
    }

    /// Set the secondary annotation shown in the UI. No default.
    pub fn with_secondary_line_text(mut self, text: &str) -> Self {
        self.secondary_line_text = Some(text.to_string());
        self
    }

    /// Override the human label. Default: title-cased `name`.
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    /// Override the doc fragment path. Default for webhooks:
    /// `{name}/doc.md`; other kinds have no default.
    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_string());
        self
    }

    /// Override the suggested channel. Default: `name`.
    pub fn with_stream_name(mut self, stream_name: &str) -> Self {
        self.stream_name = Some(stream_name.to_string());
        self
    }

    /// Override the webhook handler slug. Default:
    /// `webhooks.{name}.view.api_{name}_webhook`.
    pub fn with_handler(mut self, handler: &str) -> Self {
        self.handler = Some(handler.to_string());
        self
    }

    /// Override the inbound URL pattern. Default:
    /// `api/v1/external/{name}`.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Mark this webhook as the shared-route variant: it keeps its URL for
    /// documentation but yields no route, because another descriptor
    /// already serves that path.
    pub fn shared_route(mut self) -> Self {
        self.owns_route = false;
        self
    }

    /// Override the logo alt text. Default: `{TitleCasedName} logo`.
    pub fn with_logo_alt(mut self, logo_alt: &str) -> Self {
        self.logo_alt = Some(logo_alt.to_string());
        self
    }

    /// Override the hubot script source URL. Default:
    /// `https://github.com/hubot-scripts/hubot-{name}`.
    pub fn with_git_url(mut self, git_url: &str) -> Self {
        self.git_url = Some(git_url.to_string());
        self
    }

    /// The declared name (available before build, for diagnostics).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve all defaults and produce the immutable descriptor.
    ///
    /// `asset_root` is the directory the logo probe runs against; the
    /// stored logo path stays relative. Fails on an empty name.
    pub fn build(self, asset_root: &Path) -> Result<Integration, RegistryError> {
        if self.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let name = self.name;
        let display_name = self.display_name.unwrap_or_else(|| title_case(&name));
        let stream_name = self.stream_name.unwrap_or_else(|| name.clone());
        let logo = self.logo.unwrap_or_else(|| resolve_logo(asset_root, &name));

        let (client_name, doc, kind) = match self.kind {
            KindDef::Basic => (
                self.client_name.unwrap_or_else(|| name.clone()),
                self.doc,
                IntegrationKind::Basic,
            ),
            KindDef::Email => (
                self.client_name.unwrap_or_else(|| name.clone()),
                self.doc,
                IntegrationKind::Email,
            ),
            KindDef::Webhook => {
                let client_name = self
                    .client_name
                    .unwrap_or_else(|| format!("Relay{}Webhook", title_case(&name)));
                let doc = self.doc.or_else(|| Some(format!("{name}/doc.md")));
                let spec = WebhookSpec {
                    handler: self
                        .handler
                        .unwrap_or_else(|| format!("webhooks.{name}.view.api_{name}_webhook")),
                    url: self
                        .url
                        .unwrap_or_else(|| format!("api/v1/external/{name}")),
                    owns_route: self.owns_route,
                };
                (client_name, doc, IntegrationKind::Webhook(spec))
            }
            KindDef::Lozenge => {
                let spec = LozengeSpec {
                    // The default derives from the title-cased name, not
                    // from an overridden display name.
                    logo_alt: self
                        .logo_alt
                        .unwrap_or_else(|| format!("{} logo", title_case(&name))),
                    git_url: self
                        .git_url
                        .unwrap_or_else(|| format!("https://github.com/hubot-scripts/hubot-{name}")),
                };
                (
                    self.client_name.unwrap_or_else(|| name.clone()),
                    self.doc,
                    IntegrationKind::Lozenge(spec),
                )
            }
        };

        Ok(Integration {
            name,
            client_name,
            logo,
            secondary_line_text: self.secondary_line_text,
            display_name,
            doc,
            stream_name,
            kind,
        })
    }
}

/// Pick the logo path for `name`: the SVG when it exists under
/// `asset_root`, else the PNG path verbatim (no existence check).
fn resolve_logo(asset_root: &Path, name: &str) -> String {
    let svg = format!("images/integrations/logos/{name}.svg");
    if asset_root.join(&svg).is_file() {
        return svg;
    }
    format!("images/integrations/logos/{name}.png")
}

/// Title-case a slug: an alphabetic character is uppercased at the start
/// and after any non-alphabetic character, lowercased otherwise.
/// `google-calendar` becomes `Google-Calendar`, `github_webhook` becomes
/// `Github_Webhook`.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("circleci"), "Circleci");
        assert_eq!(title_case("google-calendar"), "Google-Calendar");
        assert_eq!(title_case("github_webhook"), "Github_Webhook");
        assert_eq!(title_case("helloworld"), "Helloworld");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_webhook_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let wh = IntegrationDef::webhook("airbrake").build(tmp.path()).unwrap();

        assert_eq!(wh.display_name, "Airbrake");
        assert_eq!(wh.client_name, "RelayAirbrakeWebhook");
        assert_eq!(wh.stream_name, "airbrake");
        assert_eq!(wh.doc.as_deref(), Some("airbrake/doc.md"));

        let spec = wh.webhook().unwrap();
        assert_eq!(spec.url, "api/v1/external/airbrake");
        assert_eq!(spec.handler, "webhooks.airbrake.view.api_airbrake_webhook");
        assert!(spec.owns_route);
    }

    #[test]
    fn test_explicit_overrides_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        let wh = IntegrationDef::webhook("circleci")
            .with_display_name("CircleCI")
            .build(tmp.path())
            .unwrap();

        assert_eq!(wh.display_name, "CircleCI");
        assert_ne!(wh.display_name, title_case("circleci"));
    }

    #[test]
    fn test_lozenge_logo_alt_default_and_explicit() {
        let tmp = tempfile::tempdir().unwrap();

        let explicit = IntegrationDef::lozenge("darksky")
            .with_display_name("Dark Sky")
            .with_logo_alt("Dark Sky logo")
            .build(tmp.path())
            .unwrap();
        assert_eq!(explicit.lozenge().unwrap().logo_alt, "Dark Sky logo");

        // Without the override the alt text derives from the name, even
        // when the display name differs.
        let derived = IntegrationDef::lozenge("darksky")
            .with_display_name("Dark Sky")
            .build(tmp.path())
            .unwrap();
        assert_eq!(derived.lozenge().unwrap().logo_alt, "Darksky logo");
    }

    #[test]
    fn test_lozenge_git_url_default() {
        let tmp = tempfile::tempdir().unwrap();
        let loz = IntegrationDef::lozenge("assembla").build(tmp.path()).unwrap();
        assert_eq!(
            loz.lozenge().unwrap().git_url,
            "https://github.com/hubot-scripts/hubot-assembla"
        );
    }

    #[test]
    fn test_logo_prefers_svg_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        let logos = tmp.path().join("images/integrations/logos");
        std::fs::create_dir_all(&logos).unwrap();
        std::fs::write(logos.join("sentry.svg"), "<svg/>").unwrap();

        let it = IntegrationDef::webhook("sentry").build(tmp.path()).unwrap();
        assert_eq!(it.logo, "images/integrations/logos/sentry.svg");
    }

    #[test]
    fn test_logo_falls_back_to_png_without_existence_check() {
        let tmp = tempfile::tempdir().unwrap();
        let logos = tmp.path().join("images/integrations/logos");
        std::fs::create_dir_all(&logos).unwrap();
        std::fs::write(logos.join("pingdom.png"), [0u8; 4]).unwrap();

        // PNG exists
        let it = IntegrationDef::webhook("pingdom").build(tmp.path()).unwrap();
        assert_eq!(it.logo, "images/integrations/logos/pingdom.png");

        // Neither exists: PNG path is still used verbatim
        let it = IntegrationDef::webhook("nosuch").build(tmp.path()).unwrap();
        assert_eq!(it.logo, "images/integrations/logos/nosuch.png");
    }

    #[test]
    fn test_explicit_logo_skips_probe() {
        let tmp = tempfile::tempdir().unwrap();
        let it = IntegrationDef::webhook("bitbucket2")
            .with_logo("images/integrations/logos/bitbucket.svg")
            .build(tmp.path())
            .unwrap();
        assert_eq!(it.logo, "images/integrations/logos/bitbucket.svg");
    }

    #[test]
    fn test_empty_name_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let err = IntegrationDef::basic("").build(tmp.path()).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyName));
    }

    #[test]
    fn test_email_gating() {
        let tmp = tempfile::tempdir().unwrap();
        let email = IntegrationDef::email("email").build(tmp.path()).unwrap();
        let basic = IntegrationDef::basic("git").build(tmp.path()).unwrap();

        let off = Settings::new("");
        let on = Settings::new("emailgateway@relay.example.com");

        assert!(!email.is_enabled(&off));
        assert!(email.is_enabled(&on));
        assert!(basic.is_enabled(&off));
        assert!(basic.is_enabled(&on));
    }
}
