use whackamole_core::{PreferenceStore, Theme};

/// Class on `<body>` that the stylesheet keys the light palette on
pub(crate) const LIGHT_CLASS: &str = "light-mode";

pub(crate) fn init(store: &impl PreferenceStore) -> Theme {
    let theme = Theme::load(store);
    apply(theme);
    theme
}

pub(crate) fn apply(theme: Theme) {
    let classes = gloo::utils::body().class_list();
    log::debug!("theme-scheme: {}", theme.scheme());
    let result = match theme {
        Theme::Light => classes.add_1(LIGHT_CLASS),
        Theme::Dark => classes.remove_1(LIGHT_CLASS),
    };
    if let Err(err) = result {
        log::error!("failed to set theme: {:?}", err);
    }
}
