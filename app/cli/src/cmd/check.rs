//! Conformance check over the provider roster.
//!
//! Verifies against the live registry rather than pattern-matching
//! source text: every identifier must resolve to a client with a wired
//! endpoint and model, and unknown identifiers must be rejected.

use crate::config::resolve_config;
use anyhow::{Result, bail};
use provider::{ProviderId, Registry, Session};

/// Run all checks, printing one pass/fail line each. Any failure makes
/// the command exit non-zero.
pub fn run(config_flag: Option<&str>) -> Result<()> {
    let config = resolve_config(config_flag)?;
    let registry = Registry::from_config(&config);
    let session = Session::from_config(&config);
    let mut failures = 0u32;

    for id in ProviderId::ALL {
        let provider = registry.resolve(id);
        report(
            provider.id() == id && provider.endpoint().contains("://"),
            &format!("{id} resolves to {} ({})", provider.endpoint(), provider.model()),
            &mut failures,
        );
        report(
            !provider.model().is_empty(),
            &format!("{id} has a model configured"),
            &mut failures,
        );
        report(
            registry.resolve_name(id.as_str()).is_ok(),
            &format!("identifier '{id}' is accepted"),
            &mut failures,
        );
    }

    report(
        registry.resolve_name("not-a-provider").is_err(),
        "unknown identifiers are rejected",
        &mut failures,
    );

    let active = session.active();
    report(true, &format!("active provider is {active}"), &mut failures);
    report(
        session.credentials().contains(active),
        &format!("credential present for active provider {active}"),
        &mut failures,
    );

    for entry in session.entries() {
        if !entry.active && !entry.has_credential {
            println!("[--] no credential stored for {}", entry.id);
        }
    }

    if failures > 0 {
        bail!("{failures} check(s) failed");
    }
    println!("all checks passed");
    Ok(())
}

fn report(ok: bool, label: &str, failures: &mut u32) {
    if ok {
        println!("[ok] {label}");
    } else {
        println!("[FAIL] {label}");
        *failures += 1;
    }
}
