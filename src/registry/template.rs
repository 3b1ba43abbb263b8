//! Dockerfile templating
//!
//! Renders the dockerfile that describes an environment. The file is plain
//! text on purpose: together with `requirements.txt` it is the portable,
//! tool-independent description of the environment.

/// Render the dockerfile for a new environment.
///
/// The generated image is based on the official Python image (optionally
/// behind a registry prefix), creates the default user with passwordless
/// sudo, and installs whatever `requirements.txt` lists at build time.
#[must_use]
pub fn render_dockerfile(repository: &str, version: &str, user: &str) -> String {
    format!(
        "\
FROM {repository}python:{version}

RUN apt update && apt install sudo

RUN adduser --gecos '' --disabled-password {user} && \\
  echo \"{user} ALL=(ALL) NOPASSWD:ALL\" >> /etc/sudoers.d/nopasswd

COPY requirements.txt /src/requirements.txt
USER {user}
RUN pip install -r /src/requirements.txt
"
    )
}
