use crate::error::Result;
use crate::git::TagSupplier;
use git2::{ErrorCode, Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;

/// Tag supplier backed by a git repository
///
/// "Latest" means nearest to `HEAD`: history is walked from `HEAD`
/// newest-first and the first commit carrying a matching tag wins, the
/// same answer `git describe --tags --abbrev=0 --match '<prefix>*'` gives.
/// When one commit carries several matching tags, the greatest name is
/// returned.
pub struct Git2TagSupplier {
    repo: Git2Repo,
}

impl Git2TagSupplier {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagSupplier { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagSupplier { repo }
    }

    fn head_oid(&self) -> Result<Option<Oid>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Commit OID -> names of tags under `prefix` pointing at it
    fn tagged_commits(&self, prefix: &str) -> Result<HashMap<Oid, Vec<String>>> {
        let mut tagged: HashMap<Oid, Vec<String>> = HashMap::new();
        let tags = self.repo.tag_names(None)?;

        for name in tags.iter().flatten().filter(|name| name.starts_with(prefix)) {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                Err(e) => {
                    log::debug!("skipping tag '{}': {}", name, e);
                    continue;
                }
            };
            // Handles both lightweight and annotated tags; tags on
            // non-commit objects are ignored.
            match reference.peel_to_commit() {
                Ok(commit) => tagged
                    .entry(commit.id())
                    .or_default()
                    .push(name.to_string()),
                Err(e) => log::debug!("skipping tag '{}': {}", name, e),
            }
        }

        Ok(tagged)
    }
}

impl TagSupplier for Git2TagSupplier {
    fn latest_tag(&self, prefix: &str) -> Result<Option<String>> {
        let Some(head) = self.head_oid()? else {
            log::debug!("repository has no commits yet");
            return Ok(None);
        };

        let tagged = self.tagged_commits(prefix)?;
        if tagged.is_empty() {
            return Ok(None);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(names) = tagged.get(&oid) {
                let latest = names.iter().max().cloned();
                log::debug!("latest tag for prefix '{}': {:?}", prefix, latest);
                return Ok(latest);
            }
        }

        Ok(None)
    }
}
