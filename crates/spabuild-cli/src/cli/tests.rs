#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_profile, parse_project_name};
    use crate::cli::{AssetsFormat, Cli, Command, ResolveFormat};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_profile_valid_names() {
        assert_eq!(parse_profile("production"), Ok("production".to_string()));
        assert_eq!(parse_profile("staging-eu_1"), Ok("staging-eu_1".to_string()));
    }

    #[test]
    fn test_parse_profile_invalid_names() {
        assert!(parse_profile("").is_err());
        assert!(parse_profile("prod.eu").is_err());
        assert!(parse_profile("prod eu").is_err());
        assert!(parse_profile("[prod]").is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::try_parse_from(["spabuild", "resolve"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.project.root, PathBuf::from("."));
                assert!(args.project.config.is_none());
                assert!(args.project.profile.is_none());
                assert_eq!(args.format, ResolveFormat::Bundler);
                assert!(args.output.is_none());
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_with_profile_and_format() {
        let cli = Cli::try_parse_from([
            "spabuild",
            "resolve",
            "--root",
            "frontend",
            "--profile",
            "production",
            "--format",
            "descriptor",
        ])
        .unwrap();

        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.project.root, PathBuf::from("frontend"));
        assert_eq!(args.project.profile.as_deref(), Some("production"));
        assert_eq!(args.format, ResolveFormat::Descriptor);
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let result = Cli::try_parse_from(["spabuild", "check", "--profile", "prod.eu"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_conflicts_with_root() {
        let result = Cli::try_parse_from([
            "spabuild",
            "check",
            "--root",
            "a",
            "--config",
            "b/spabuild.toml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["spabuild", "-v", "-q", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["spabuild", "check", "--no-fs", "--no-color"]).unwrap();
        assert!(cli.no_color);
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert!(args.no_fs);
    }

    #[test]
    fn test_assets_defaults() {
        let cli = Cli::try_parse_from(["spabuild", "assets"]).unwrap();
        let Command::Assets(args) = cli.command else {
            panic!("expected assets");
        };
        assert_eq!(args.entry, "main");
        assert_eq!(args.format, AssetsFormat::Html);
    }

    #[test]
    fn test_init_has_no_project_args() {
        let cli = Cli::try_parse_from(["spabuild", "init", "web", "--force"]).unwrap();
        assert!(cli.command.project().is_none());
        let Command::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.dir, PathBuf::from("web"));
        assert!(args.force);
    }

    #[test]
    fn test_parse_project_name() {
        assert_eq!(parse_project_name("shop-front_2"), Ok("shop-front_2".to_string()));
        assert!(parse_project_name("").is_err());
        assert!(parse_project_name(".hidden").is_err());
        assert!(parse_project_name("_private").is_err());
        assert!(parse_project_name("my app").is_err());
    }

    #[test]
    fn test_new_requires_name_and_dir() {
        assert!(Cli::try_parse_from(["spabuild", "new", "shop"]).is_err());

        let cli = Cli::try_parse_from(["spabuild", "new", "shop", "web", "--force"]).unwrap();
        assert!(cli.command.project().is_none());
        let Command::New(args) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(args.name, "shop");
        assert_eq!(args.dir, PathBuf::from("web"));
        assert!(args.force);
    }
}
