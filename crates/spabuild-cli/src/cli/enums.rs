use clap::ValueEnum;

/// JSON shape printed by `spabuild resolve`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ResolveFormat {
    /// The bundler's configuration schema
    #[value(name = "bundler")]
    Bundler,

    /// The resolved descriptor record
    #[value(name = "descriptor")]
    Descriptor,
}

/// Output shape of `spabuild assets`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum AssetsFormat {
    /// Script, stylesheet, and modulepreload tags ready to paste into a page
    #[value(name = "html")]
    Html,

    /// `{ script, styles, preloads }` as JSON
    #[value(name = "json")]
    Json,
}
