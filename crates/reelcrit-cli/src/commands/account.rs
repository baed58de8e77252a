use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reelcrit_core::SessionState;

/// Capture the token the external login flow hands back and resolve it to a
/// member record. The login page itself is never called by the client.
pub async fn run_login(
    token: Option<String>,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => {
            output.println(format!(
                "Open {} in a browser; after logging in, the callback URL carries ?token=",
                ctx.config.login_url()
            ));
            dialoguer::Input::<String>::new()
                .with_prompt("Paste the token")
                .interact_text()?
        }
    };
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(eyre!("token cannot be empty"));
    }

    let result = ctx.api.member(&token).await;
    let member = match result {
        Ok(member) => member,
        Err(err) => return Err(ctx.fail(err, output)),
    };

    let nick = member.nick_name.clone();
    ctx.session
        .login(token, member)
        .map_err(|e| eyre!("{}", e))?;
    output.success(format!("Logged in as {}", nick));
    Ok(())
}

pub fn run_logout(ctx: &mut AppContext, output: &Output) -> Result<()> {
    ctx.session.logout().map_err(|e| eyre!("{}", e))?;
    output.success("Logged out; session cleared.");
    Ok(())
}

pub fn run_whoami(ctx: &AppContext, output: &Output) -> Result<()> {
    match ctx.session.state() {
        SessionState::Active => {
            let nick = ctx
                .session
                .member()
                .map(|m| m.nick_name.as_str())
                .unwrap_or("(unknown)");
            // The nickname may be stale if the token has since expired
            // server-side; the next authorized call corrects it.
            output.println(format!("Logged in as {}", nick));
        }
        SessionState::Expired => {
            output.println("Session expired; log in again.");
        }
        SessionState::Anonymous => {
            output.println("Not logged in.");
        }
    }
    Ok(())
}
