use anyhow::{bail, Result};

pub fn is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

/// Destructive commands need both an explicit `--yes-i-know` and root.
pub fn check_destructive(yes_i_know: bool, is_root: bool) -> Result<()> {
    if !yes_i_know {
        bail!("Missing --yes-i-know flag. This operation is destructive!");
    }
    if !is_root {
        bail!("This operation must be run as root");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_without_confirmation() {
        let err = check_destructive(false, true).unwrap_err();
        assert!(err.to_string().contains("--yes-i-know"));
    }

    #[test]
    fn refuses_non_root() {
        let err = check_destructive(true, false).unwrap_err();
        assert!(err.to_string().contains("root"));
    }

    #[test]
    fn confirmation_is_checked_first() {
        let err = check_destructive(false, false).unwrap_err();
        assert!(err.to_string().contains("--yes-i-know"));
    }

    #[test]
    fn confirmed_root_passes() {
        check_destructive(true, true).unwrap();
    }
}
