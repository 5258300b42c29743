use crate::application::DeployOptions;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_deploy_header(
    options: &DeployOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "Apollo Deploy");
    header.add("Target", options.target.repository());
    header.add("User", options.username.as_str());
    header.add("Build mode", options.build_mode.as_str());
    if options.skip_sanity_check {
        header.add("Sanity check", "skipped");
    }
    if options.verbose {
        header.add("Upload", "verbose");
    }

    header.render(supports_color, supports_unicode)
}
