//! Command execution context
//!
//! Runs the steps every command shares before its request: check the
//! command's own flags, then build the API client.

use crate::cli::args::GlobalOptions;
use crate::cli::validate::Validate;
use crate::client::VelaClient;
use crate::error::Result;

/// Context for command execution holding the authenticated client.
pub struct CommandContext {
    pub client: VelaClient,
}

impl CommandContext {
    /// Validate `args`, then create a client for the server in `opts`.
    ///
    /// The address and token are not flag-checked: an empty or malformed
    /// address fails client construction, and the token is sent as given.
    ///
    /// # Errors
    /// Returns `InvalidCommand` for the first missing flag, or a client
    /// construction error when the address is empty or malformed.
    pub fn new(opts: &GlobalOptions, args: &dyn Validate) -> Result<Self> {
        args.validate()?;

        let client = VelaClient::new(&opts.addr, &opts.token)?;

        Ok(Self { client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::repo::RepoGetArgs;
    use crate::cli::validate::{Requirement, flag};
    use crate::error::{ApiError, Error};

    struct NeedsOrg(Option<String>);

    impl Validate for NeedsOrg {
        fn required(&self) -> Vec<Requirement<'_>> {
            vec![flag("org", &self.0)]
        }
    }

    fn opts(addr: &str, token: &str) -> GlobalOptions {
        GlobalOptions {
            addr: addr.to_string(),
            token: token.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_addr_fails_construction() {
        let result = CommandContext::new(&opts("", "foobar"), &RepoGetArgs::default());

        assert!(matches!(
            result,
            Err(Error::Api(ApiError::ClientConstruction { ref addr, .. })) if addr.is_empty()
        ));
    }

    #[test]
    fn test_empty_token_is_not_a_missing_flag() {
        let result = CommandContext::new(&opts("http://localhost:8080", ""), &RepoGetArgs::default());

        assert!(result.is_ok());
    }

    #[test]
    fn test_command_flags_checked_before_client() {
        let result = CommandContext::new(&opts("not a url", "foobar"), &NeedsOrg(None));

        assert!(matches!(result, Err(Error::InvalidCommand { ref field }) if field == "org"));
    }

    #[test]
    fn test_malformed_addr_fails_construction() {
        let result = CommandContext::new(
            &opts("not a url", "foobar"),
            &NeedsOrg(Some("github".to_string())),
        );

        assert!(matches!(
            result,
            Err(Error::Api(ApiError::ClientConstruction { .. }))
        ));
    }

    #[test]
    fn test_valid_context() {
        let result = CommandContext::new(
            &opts("http://localhost:8080", "foobar"),
            &NeedsOrg(Some("github".to_string())),
        );

        assert!(result.is_ok());
    }
}
