use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;

pub fn run_show(ctx: &AppContext, output: &Output) -> Result<()> {
    if output.is_human() {
        output.println(format!("config file: {}", ctx.paths.config_file().display()));
        output.println(format!("base URL:    {}", ctx.config.base_url()));
        output.println(format!("login URL:   {}", ctx.config.login_url()));
    } else {
        output.print_json(&serde_json::json!({
            "configFile": ctx.paths.config_file().display().to_string(),
            "baseUrl": ctx.config.base_url(),
            "loginUrl": ctx.config.login_url(),
        }));
    }
    Ok(())
}

pub fn run_set_url(url: String, ctx: &mut AppContext, output: &Output) -> Result<()> {
    ctx.config.api.base_url = url.trim_end_matches('/').to_string();
    ctx.config
        .save(&ctx.paths.config_file())
        .map_err(|e| eyre!("{}", e))?;
    output.success(format!("Base URL set to {}", ctx.config.api.base_url));
    Ok(())
}
