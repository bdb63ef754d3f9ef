//! The builtin integration catalog.
//!
//! This is the canonical, documented list of every integration the server
//! ships: webhook integrations (which also drive inbound route
//! registration), plugin/script integrations, and Hubot lozenges. To add a
//! new webhook integration, append an `IntegrationDef::webhook(..)` entry
//! to [`webhook_integrations`]; everything else about it (client name,
//! URL, handler slug, doc path, logo) is derived from the name unless
//! overridden here.

use std::path::Path;

use crate::descriptor::IntegrationDef;
use crate::registry::{IntegrationRegistry, RegistryError};

/// Plugin and script integrations with no inbound endpoint.
pub fn integrations() -> Vec<IntegrationDef> {
    vec![
        IntegrationDef::basic("asana").with_doc("integrations/asana.md"),
        IntegrationDef::basic("capistrano")
            .with_display_name("Capistrano")
            .with_doc("integrations/capistrano.md"),
        IntegrationDef::basic("codebase").with_doc("integrations/codebase.md"),
        IntegrationDef::email("email").with_doc("integrations/email.md"),
        IntegrationDef::basic("git")
            .with_doc("integrations/git.md")
            .with_stream_name("commits"),
        IntegrationDef::basic("google-calendar")
            .with_display_name("Google Calendar")
            .with_doc("integrations/google-calendar.md"),
        IntegrationDef::basic("hubot").with_doc("integrations/hubot.md"),
        IntegrationDef::basic("jenkins")
            .with_secondary_line_text("(or Hudson)")
            .with_doc("integrations/jenkins.md"),
        IntegrationDef::basic("jira-plugin")
            .with_logo("images/integrations/logos/jira.svg")
            .with_secondary_line_text("(locally installed)")
            .with_display_name("JIRA")
            .with_doc("integrations/jira-plugin.md")
            .with_stream_name("jira"),
        IntegrationDef::basic("mercurial")
            .with_display_name("Mercurial (hg)")
            .with_doc("integrations/mercurial.md")
            .with_stream_name("commits"),
        IntegrationDef::basic("nagios").with_doc("integrations/nagios.md"),
        IntegrationDef::basic("openshift")
            .with_display_name("OpenShift")
            .with_doc("integrations/openshift.md")
            .with_stream_name("deployments"),
        IntegrationDef::basic("perforce").with_doc("integrations/perforce.md"),
        IntegrationDef::basic("phabricator").with_doc("integrations/phabricator.md"),
        IntegrationDef::basic("puppet").with_doc("integrations/puppet.md"),
        IntegrationDef::basic("redmine").with_doc("integrations/redmine.md"),
        IntegrationDef::basic("rss")
            .with_display_name("RSS")
            .with_doc("integrations/rss.md"),
        IntegrationDef::basic("svn")
            .with_display_name("Subversion")
            .with_doc("integrations/svn.md")
            .with_stream_name("commits"),
        IntegrationDef::basic("trac").with_doc("integrations/trac.md"),
        IntegrationDef::basic("trello-plugin")
            .with_logo("images/integrations/logos/trello.svg")
            .with_secondary_line_text("(legacy)")
            .with_display_name("Trello")
            .with_doc("integrations/trello-plugin.md")
            .with_stream_name("trello"),
        IntegrationDef::basic("twitter").with_doc("integrations/twitter.md"),
    ]
}

/// Webhook integrations, in route-registration order.
pub fn webhook_integrations() -> Vec<IntegrationDef> {
    vec![
        IntegrationDef::webhook("airbrake"),
        IntegrationDef::webhook("appfollow").with_display_name("AppFollow"),
        IntegrationDef::webhook("beanstalk"),
        IntegrationDef::webhook("basecamp"),
        IntegrationDef::webhook("bitbucket2")
            .with_logo("images/integrations/logos/bitbucket.svg")
            .with_display_name("Bitbucket")
            .with_stream_name("bitbucket"),
        IntegrationDef::webhook("bitbucket")
            .with_display_name("Bitbucket")
            .with_secondary_line_text("(Enterprise)")
            .with_stream_name("commits"),
        IntegrationDef::webhook("circleci").with_display_name("CircleCI"),
        IntegrationDef::webhook("codeship"),
        IntegrationDef::webhook("crashlytics"),
        IntegrationDef::webhook("delighted").with_display_name("Delighted"),
        IntegrationDef::webhook("deskdotcom")
            .with_logo("images/integrations/logos/deskcom.png")
            .with_display_name("Desk.com")
            .with_stream_name("desk"),
        IntegrationDef::webhook("freshdesk"),
        // The two GitHub integrations share one physical route; only the
        // current one may register it.
        IntegrationDef::webhook("github")
            .with_handler("webhooks.github.view.api_github_landing")
            .with_display_name("GitHub")
            .with_secondary_line_text("(deprecated)")
            .with_stream_name("commits")
            .shared_route(),
        IntegrationDef::webhook("github_webhook")
            .with_display_name("GitHub")
            .with_logo("images/integrations/logos/github.svg")
            .with_secondary_line_text("(webhook)")
            .with_handler("webhooks.github_webhook.view.api_github_webhook")
            .with_url("api/v1/external/github")
            .with_stream_name("github"),
        IntegrationDef::webhook("gitlab").with_display_name("GitLab"),
        IntegrationDef::webhook("gogs"),
        IntegrationDef::webhook("gosquared").with_display_name("GoSquared"),
        IntegrationDef::webhook("greenhouse").with_display_name("Greenhouse"),
        IntegrationDef::webhook("hellosign").with_display_name("HelloSign"),
        IntegrationDef::webhook("helloworld").with_display_name("Hello World"),
        IntegrationDef::webhook("heroku").with_display_name("Heroku"),
        IntegrationDef::webhook("homeassistant").with_display_name("Home Assistant"),
        IntegrationDef::webhook("ifttt")
            .with_handler("webhooks.ifttt.view.api_iftt_app_webhook")
            .with_display_name("IFTTT"),
        IntegrationDef::webhook("jira")
            .with_secondary_line_text("(hosted or v5.2+)")
            .with_display_name("JIRA"),
        IntegrationDef::webhook("librato"),
        IntegrationDef::webhook("mention").with_display_name("Mention"),
        IntegrationDef::webhook("newrelic").with_display_name("New Relic"),
        IntegrationDef::webhook("pagerduty"),
        IntegrationDef::webhook("papertrail"),
        IntegrationDef::webhook("pingdom"),
        IntegrationDef::webhook("pivotal").with_display_name("Pivotal Tracker"),
        IntegrationDef::webhook("semaphore").with_stream_name("builds"),
        IntegrationDef::webhook("sentry"),
        IntegrationDef::webhook("slack"),
        IntegrationDef::webhook("solano").with_display_name("Solano Labs"),
        IntegrationDef::webhook("splunk").with_display_name("Splunk"),
        IntegrationDef::webhook("stripe").with_display_name("Stripe"),
        IntegrationDef::webhook("taiga"),
        IntegrationDef::webhook("teamcity"),
        IntegrationDef::webhook("transifex"),
        IntegrationDef::webhook("travis").with_display_name("Travis CI"),
        IntegrationDef::webhook("trello").with_secondary_line_text("(webhook)"),
        IntegrationDef::webhook("updown"),
        IntegrationDef::webhook("yo")
            .with_handler("webhooks.yo.view.api_yo_app_webhook")
            .with_display_name("Yo App"),
        IntegrationDef::webhook("wordpress").with_display_name("WordPress"),
        IntegrationDef::webhook("zapier"),
        IntegrationDef::webhook("zendesk"),
    ]
}

/// Hubot script lozenges.
pub fn hubot_lozenges() -> Vec<IntegrationDef> {
    vec![
        IntegrationDef::lozenge("assembla"),
        IntegrationDef::lozenge("bonusly"),
        IntegrationDef::lozenge("chartbeat"),
        IntegrationDef::lozenge("darksky")
            .with_display_name("Dark Sky")
            .with_logo_alt("Dark Sky logo"),
        IntegrationDef::lozenge("google-hangouts").with_display_name("Hangouts"),
        IntegrationDef::lozenge("instagram")
            .with_logo("images/integrations/logos/instagram.png"),
        IntegrationDef::lozenge("mailchimp")
            .with_display_name("MailChimp")
            .with_logo_alt("MailChimp logo"),
        IntegrationDef::lozenge("google-translate")
            .with_display_name("Translate")
            .with_logo_alt("Google Translate logo"),
        IntegrationDef::lozenge("youtube")
            .with_display_name("YouTube")
            .with_logo_alt("YouTube logo"),
    ]
}

/// Every builtin integration, in documentation order: plugin/script
/// integrations, then webhooks, then lozenges.
pub fn builtin_defs() -> Vec<IntegrationDef> {
    let mut defs = integrations();
    defs.extend(webhook_integrations());
    defs.extend(hubot_lozenges());
    defs
}

/// Build the registry holding the full builtin catalog.
pub fn builtin_registry(asset_root: &Path) -> Result<IntegrationRegistry, RegistryError> {
    IntegrationRegistry::new(builtin_defs(), asset_root)
}
