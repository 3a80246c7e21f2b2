use std::env;

const DISABLE_ENV: &str = "LANEWISE_DISABLE_RANGE_CHECK";

// Inputs that decide whether `Array` indexing is range checked
#[derive(Debug)]
struct RangeCheck {
    debug_assertions: bool,
    disabled_by_feature: bool,
    disabled_by_env: bool,
}

impl RangeCheck {
    fn detect() -> Self {
        let disabled_by_env = env::var(DISABLE_ENV)
            .map(|value| !matches!(value.trim(), "" | "0" | "false"))
            .unwrap_or(false);

        RangeCheck {
            debug_assertions: env::var_os("CARGO_CFG_DEBUG_ASSERTIONS").is_some(),
            disabled_by_feature: env::var_os("CARGO_FEATURE_DISABLE_RANGE_CHECK").is_some(),
            disabled_by_env,
        }
    }

    // Checks only run in debug builds, and either switch turns them off
    fn enabled(&self) -> bool {
        self.debug_assertions && !self.disabled_by_feature && !self.disabled_by_env
    }

    fn apply(&self) {
        println!("cargo::rustc-check-cfg=cfg(range_check)");

        if self.enabled() {
            println!("cargo:rustc-cfg=range_check");
        }
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed={DISABLE_ENV}");
    println!("cargo:rerun-if-changed=build.rs");

    RangeCheck::detect().apply();
}
