//! Static bundle templates.

/// General manifest, rendered with `chapter`, `image` and `name`.
pub const GENERAL_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Chapters</key>
    <array>
        <string>{{chapter}}</string>
    </array>
    <key>ContentIdentifier</key>
    <string>com.apple.playgrounds.blank</string>
    <key>ContentVersion</key>
    <string>1.0</string>
    <key>DeploymentTarget</key>
    <string>ios11.0</string>
    <key>DevelopmentRegion</key>
    <string>en</string>
    <key>ImageReference</key>
    <string>{{image}}</string>
    <key>Name</key>
    <string>{{name}}</string>
    <key>Version</key>
    <string>6.0</string>
    <key>UserModuleMode</key>
    <string>Full</string>
</dict>
</plist>
"#;

/// Chapter manifest, rendered with `name`, `template_page` and `page`.
pub const CHAPTER_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Name</key>
    <string>{{name}}</string>
    <key>TemplatePageFilename</key>
    <string>{{template_page}}</string>
    <key>InitialUserPages</key>
    <array>
        <string>{{page}}</string>
    </array>
</dict>
</plist>
"#;

/// Page manifest, rendered with `name`.
pub const PAGE_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Name</key>
    <string>{{name}}</string>
    <key>LiveViewEdgeToEdge</key>
    <true/>
    <key>LiveViewMode</key>
    <string>VisibleByDefault</string>
</dict>
</plist>
"#;

/// Body written into every page.
pub const PAGE_SOURCE: &str = r#"//#-hidden-code
import UIKit
import PlaygroundSupport

let liveView = UIView()

PlaygroundPage.current.liveView = liveView
PlaygroundPage.current.needsIndefiniteExecution = true

enum PlaygroundColor {
    static let brand = UIColor(red: 140/255.0, green: 68/255.0, blue: 1, alpha: 1)
    static let accent = UIColor(red: 213/255.0, green: 64/255.0, blue: 72/255.0, alpha: 1)
    static let white = UIColor.white
    static let black = UIColor.black
    static let yellow = UIColor(red: 1, green: 237/255.0, blue: 117/255.0, alpha: 1)
    static let green = UIColor(red: 110/255.0, green: 240/255.0, blue: 167/255.0, alpha: 1)
    static let blue = UIColor(red: 66/255.0, green: 197/255.0, blue: 1, alpha: 1)
    static let orange = UIColor(red: 1, green: 159/255.0, blue: 70/255.0, alpha: 1)
}
//#-end-hidden-code
liveView.backgroundColor = PlaygroundColor.brand
"#;
