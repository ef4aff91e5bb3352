//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Mosaic Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[grid]
# margin = 8             # outer margin in px, 0-64
# gap = 6                # seam between tiles in px, 0-32
# min_w = 2              # minimum tile width in columns, 1-12
# min_h = 2              # minimum tile height in rows, 1-12

[floating]
# width = 480            # 120-4096
# height = 360           # 120-4096

[viewport]
# width = 1920           # 200-16384
# height = 1080          # 200-16384

[storage]
# state_file = ""        # empty = platform data dir, mosaic/state.json

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
