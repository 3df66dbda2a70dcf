//! Plain-text profile card.

use std::fmt::{self, Write};

use profile_loader::{format_date, OrganizationSummary, ProfileBundle, UserProfile};

/// Render the bundle the way the profile page lays it out.
pub fn profile_card(bundle: &ProfileBundle) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let crumbs: Vec<_> = bundle.breadcrumbs().into_iter().map(|c| c.label).collect();
    writeln!(out, "{}", crumbs.join(" / "))?;
    writeln!(out)?;

    write_user(&mut out, bundle.user())?;

    writeln!(out)?;
    writeln!(out, "Organization Memberships")?;
    if bundle.organizations().is_empty() {
        writeln!(out, "  This user is not a member of any organizations yet.")?;
    }
    for org in bundle.organizations() {
        write_organization(&mut out, org)?;
    }

    Ok(out)
}

/// Present and non-blank values only.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn write_user(out: &mut String, user: &UserProfile) -> fmt::Result {
    match &user.status {
        Some(status) => writeln!(out, "{} [{}]", user.display_name(), status.label())?,
        None => writeln!(out, "{}", user.display_name())?,
    }
    writeln!(out, "{}", user.handle())?;
    if let Some(title) = non_empty(&user.title) {
        writeln!(out, "{}", title)?;
    }
    if let Some(created_at) = user.created_at {
        writeln!(out, "Member since {}", format_date(created_at))?;
    }

    writeln!(out)?;
    writeln!(out, "About")?;
    writeln!(out, "  {}", user.bio_or_default())?;

    writeln!(out)?;
    writeln!(out, "Contact Information")?;
    if !user.email.trim().is_empty() {
        writeln!(out, "  {}", user.email)?;
    }
    for line in [&user.phone, &user.address].into_iter().filter_map(non_empty) {
        writeln!(out, "  {}", line)?;
    }

    if !user.languages().is_empty() {
        writeln!(out)?;
        writeln!(out, "Languages: {}", user.languages().join(", "))?;
    }
    if !user.links().is_empty() {
        writeln!(out)?;
        writeln!(out, "Links")?;
        for link in user.links() {
            writeln!(out, "  {}", link)?;
        }
    }

    Ok(())
}

fn write_organization(out: &mut String, org: &OrganizationSummary) -> fmt::Result {
    writeln!(out)?;
    match &org.status {
        Some(status) => writeln!(out, "  {} [{}]", org.name, status.label())?,
        None => writeln!(out, "  {}", org.name)?,
    }
    for line in [&org.email, &org.website].into_iter().filter_map(non_empty) {
        writeln!(out, "    {}", line)?;
    }

    write!(out, "    {} members", org.member_count())?;
    if let Some(created_at) = org.created_at {
        write!(out, "  Joined {}", format_date(created_at))?;
    }
    writeln!(out)
}
