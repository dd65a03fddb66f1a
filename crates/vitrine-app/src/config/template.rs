//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Vitrine Configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Vitrine"
# width = 1280
# height = 800
# background = "#101010"
# dynamic_title = true

[engine]
# frame_rate = 60                     # 1-240, paint rate per view
# remote_debugging_port = 9222
# cache_path = "/var/cache/vitrine"   # unset = incognito
# transparent = false
# audio_muted = false
# enable_webgl = true
# autoplay = true

[input]
# scroll_pixels_per_line = 40.0
# natural_scrolling = false

# Views are placed by fractional viewports inside the window. Viewports
# must stay inside the unit square and must not overlap. With no views
# configured (and none on the command line) a single full-window view
# opens.

# [[views]]
# url = "https://example.com"
# spin = false
# [views.viewport]
# x = 0.0
# y = 0.0
# width = 0.5
# height = 1.0

# [[views]]
# url = "https://example.org"
# [views.viewport]
# x = 0.5
# y = 0.0
# width = 0.5
# height = 1.0
"##
    .to_string()
}
