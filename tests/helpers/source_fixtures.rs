//! Common dialect sources for tests.

use std::path::{Path, PathBuf};

// Single controls
pub const CLASSIC_BUTTON: &str = "- Button1:
    Control: Classic/Button@2.2.0
    Properties:
      Text: \"Submit\"
      RadiusTopLeft: 5
";

pub const CLASSIC_BUTTON_ALL_CORNERS: &str = "- Button1:
    Control: Classic/Button@2.2.0
    Properties:
      Text: =\"Submit\"
      RadiusTopLeft: 5
      RadiusTopRight: 5
      RadiusBottomLeft: 5
      RadiusBottomRight: 5
";

pub const CLASSIC_BUTTON_CUSTOM_TYPE: &str = "- Button1:
    Control: Classic/Button@2.2.0
    Properties:
      ButtonType: \"Custom\"
      Text: =\"Go\"
";

pub const CLASSIC_TEXT_INPUT: &str = "- Input1:
    Control: Classic/TextInput@2.3.2
    Properties:
      Default: =\"\"
      HintText: =\"Search\"
      HoverFill: =RGBA(0, 0, 0, 1)
";

pub const UNKNOWN_CONTROL: &str = "- Widget1:
    Control: Contoso/Widget@1.0.0
    Properties:
      Text: =\"?\"
";

pub const NOT_A_CONTROL: &str = "title: Orders
owner: =User().Email
";

// Nested controls
pub const GALLERY_WITH_CHILD: &str = "- Gallery1:
    Control: Gallery@2.15.0
    Properties:
      Items: =Orders
    Children:
      - Title1:
          Control: Label@2.5.1
          Properties:
            Text: =ThisItem.Name
            Color: =RGBA(0, 0, 0, 1)
";

/// Directory of classic sample files.
pub fn classic_fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/classic")
}
