//! Command-line front end.
//!
//! Each command drives one view-model and prints what it ends up showing.
//! Feed and profile views only log their failures, so the commands check
//! the resulting view state to decide the exit status.
//!
//! ```ignore
//! use clap::Parser;
//! use murmur::cli::{run, Cli};
//!
//! let cli = Cli::parse();
//! run(cli.command, api, session, &cli.config()).await?;
//! ```

pub mod args;
pub mod output;

pub use args::{Cli, Command};

use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::models::PostId;
use crate::session::SessionStore;
use crate::traits::HttpClient;
use crate::views::{
    FeedState, FeedViewModel, LoginView, OwnProfileView, Picture, PublicProfileView, RegisterView,
    Route,
};
use output::icons;

const SIGNED_OUT_HINT: &str = "Not signed in. Run `murmur login <username>` first.";
const DETAILS_HINT: &str = "run with -v for details";

/// Execute one command against the backend.
pub async fn run<H: HttpClient>(
    command: Command,
    api: ApiClient<H>,
    session: SessionStore,
    config: &ClientConfig,
) -> Result<()> {
    match command {
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let (password, confirm_password) = match password {
                Some(p) => {
                    let confirm = confirm_password.unwrap_or_else(|| p.clone());
                    (p, confirm)
                }
                None => (
                    rpassword::prompt_password("Password: ")?,
                    rpassword::prompt_password("Confirm password: ")?,
                ),
            };
            register(api, config, username, email, password, confirm_password).await
        }
        Command::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            login(api, session, username, password).await
        }
        Command::Logout => {
            let mut feed = FeedViewModel::new(api, session);
            feed.logout();
            output::print_status(icons::SUCCESS, "Signed out");
            Ok(())
        }
        Command::Whoami => {
            match session.user() {
                Some(user) => output::print_identity(&user),
                None => println!("Not signed in."),
            }
            Ok(())
        }
        Command::Feed => show_feed(api, session).await,
        Command::Post { content } => create_post(api, session, content).await,
        Command::Like { post_id } => toggle_like(api, session, post_id).await,
        Command::Comment { post_id, content } => add_comment(api, session, post_id, content).await,
        Command::Profile { username: None } => show_own_profile(api, session).await,
        Command::Profile {
            username: Some(username),
        } => show_profile(api, &username).await,
        Command::UploadPic { file } => {
            let mut view = OwnProfileView::new(api, session);
            if view.refresh().await == Some(Route::Login) {
                bail!(SIGNED_OUT_HINT);
            }
            if !view.upload_picture(&file).await {
                bail!("Could not upload {} ({})", file.display(), DETAILS_HINT);
            }
            output::print_status(icons::SUCCESS, "Profile picture updated");
            if let Some(profile) = view.profile() {
                output::print_profile(profile, view.picture());
            }
            Ok(())
        }
    }
}

async fn register<H: HttpClient>(
    api: ApiClient<H>,
    config: &ClientConfig,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<()> {
    let mut view = RegisterView::new(api).with_redirect_delay(config.redirect_delay);
    view.username = username;
    view.email = email;
    view.password = password;
    view.confirm_password = confirm_password;

    let Some(redirect) = view.submit().await else {
        let message = view.error().unwrap_or("Registration failed").to_string();
        output::print_status(icons::FAILURE, &message);
        return Err(eyre!(message));
    };

    if let Some(message) = view.success() {
        output::print_status(icons::SUCCESS, message);
    }
    let next = redirect.wait().await;
    tracing::debug!(route = %next, "redirect");
    println!("Next: murmur login {}", view.username);
    Ok(())
}

async fn login<H: HttpClient>(
    api: ApiClient<H>,
    session: SessionStore,
    username: String,
    password: String,
) -> Result<()> {
    let mut view = LoginView::new(api, session.clone());
    view.username = username;
    view.password = password;

    if view.submit().await.is_none() {
        let message = view.error().unwrap_or("Login failed").to_string();
        output::print_status(icons::FAILURE, &message);
        return Err(eyre!(message));
    }

    let handle = session
        .user()
        .map(|u| u.handle())
        .unwrap_or_else(|| view.username.clone());
    output::print_status(icons::SUCCESS, &format!("Signed in as {}", handle));
    Ok(())
}

fn print_loaded_feed<H: HttpClient>(feed: &FeedViewModel<H>, session: &SessionStore) -> Result<()> {
    if feed.state() != FeedState::Ready {
        bail!("Could not load the feed ({})", DETAILS_HINT);
    }
    output::print_feed(feed.posts(), session.user().map(|u| u.id));
    Ok(())
}

async fn show_feed<H: HttpClient>(api: ApiClient<H>, session: SessionStore) -> Result<()> {
    let mut feed = FeedViewModel::new(api, session.clone());
    if feed.enter().await == Some(Route::Login) {
        bail!(SIGNED_OUT_HINT);
    }
    print_loaded_feed(&feed, &session)
}

async fn create_post<H: HttpClient>(
    api: ApiClient<H>,
    session: SessionStore,
    content: String,
) -> Result<()> {
    if !session.is_authenticated() {
        bail!(SIGNED_OUT_HINT);
    }
    if content.trim().is_empty() {
        bail!("Nothing to post");
    }

    let mut feed = FeedViewModel::new(api, session.clone());
    feed.set_new_post(content);
    if !feed.create_post().await {
        bail!("Could not publish the post ({})", DETAILS_HINT);
    }
    output::print_status(icons::SUCCESS, "Posted");
    print_loaded_feed(&feed, &session)
}

async fn toggle_like<H: HttpClient>(
    api: ApiClient<H>,
    session: SessionStore,
    post_id: PostId,
) -> Result<()> {
    if !session.is_authenticated() {
        bail!(SIGNED_OUT_HINT);
    }

    let mut feed = FeedViewModel::new(api, session.clone());
    if !feed.toggle_like(post_id).await {
        bail!("Could not like post #{} ({})", post_id, DETAILS_HINT);
    }
    if feed.state() != FeedState::Ready {
        bail!(
            "Like on post #{} went through but the feed could not be reloaded ({})",
            post_id,
            DETAILS_HINT
        );
    }
    let Some(post) = feed.post(post_id) else {
        bail!("Post #{} is no longer in the feed", post_id);
    };

    let liked = session.user().is_some_and(|u| post.is_liked_by(u.id));
    let (icon, verb) = if liked {
        (icons::LIKED, "Liked")
    } else {
        (icons::NOT_LIKED, "Unliked")
    };
    output::print_status(
        icon,
        &format!("{} post #{} ({})", verb, post_id, post.like_label()),
    );
    Ok(())
}

async fn add_comment<H: HttpClient>(
    api: ApiClient<H>,
    session: SessionStore,
    post_id: PostId,
    content: String,
) -> Result<()> {
    if !session.is_authenticated() {
        bail!(SIGNED_OUT_HINT);
    }
    if content.trim().is_empty() {
        bail!("Nothing to comment");
    }

    let mut feed = FeedViewModel::new(api, session.clone());
    feed.set_comment_draft(post_id, content);
    if !feed.add_comment(post_id).await {
        bail!("Could not comment on post #{} ({})", post_id, DETAILS_HINT);
    }
    output::print_status(icons::SUCCESS, &format!("Commented on post #{}", post_id));
    Ok(())
}

async fn show_own_profile<H: HttpClient>(api: ApiClient<H>, session: SessionStore) -> Result<()> {
    let mut view = OwnProfileView::new(api, session);
    if view.refresh().await == Some(Route::Login) {
        bail!(SIGNED_OUT_HINT);
    }
    let Some(profile) = view.profile() else {
        bail!("Could not load your profile ({})", DETAILS_HINT);
    };
    output::print_profile(profile, view.picture());
    Ok(())
}

async fn show_profile<H: HttpClient>(api: ApiClient<H>, username: &str) -> Result<()> {
    let mut view = PublicProfileView::new(api);
    view.show(username).await;
    let Some(profile) = view.profile() else {
        bail!("Could not load @{} ({})", username, DETAILS_HINT);
    };
    let picture = match &profile.profile_pic {
        Some(reference) => Picture::Remote(reference.clone()),
        None => Picture::None,
    };
    output::print_profile(profile, &picture);
    Ok(())
}
