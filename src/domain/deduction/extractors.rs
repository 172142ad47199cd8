//! Per-provider field extractors.
//!
//! Each extractor reads one provider's URL layout and never fails: when the
//! expected structure is missing, the external id degrades to a stable hash
//! of the URL without its query string.

use std::sync::LazyLock;

use regex::Regex;

use super::tables::is_generic_path_word;
use crate::domain::entities::{NormalizedUrl, RawExtraction};
use crate::utils::stable_hash::stable_hash;

/// Leading numeric id of a slug such as `14702571-senior-engineer`.
static NUMERIC_SLUG_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:-|$)").unwrap());

/// At least six digits.
fn looks_like_numeric_id(segment: &str) -> bool {
    segment.len() >= 6 && segment.bytes().all(|b| b.is_ascii_digit())
}

/// At least six characters of `[A-Za-z0-9._-]`.
fn looks_like_alnum_id(segment: &str) -> bool {
    segment.len() >= 6
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

/// Hash of the URL with its query string removed.
fn url_hash(url: &NormalizedUrl) -> String {
    stable_hash(url.href_without_query())
}

/// `id` when present and accepted by `accept`, otherwise the URL hash.
fn id_or_url_hash(url: &NormalizedUrl, id: Option<&str>, accept: fn(&str) -> bool) -> String {
    match id {
        Some(id) if accept(id) => id.to_string(),
        _ => url_hash(url),
    }
}

/// Hash of `slug` when present, otherwise the URL hash.
fn slug_hash_or_url_hash(url: &NormalizedUrl, slug: Option<&str>) -> String {
    slug.map_or_else(|| url_hash(url), stable_hash)
}

fn any_id(_: &str) -> bool {
    true
}

fn not_generic(segment: &str) -> bool {
    !is_generic_path_word(segment)
}

/// Job board: hashes the trailing slug.
pub fn weworkremotely(url: &NormalizedUrl) -> RawExtraction {
    RawExtraction::for_provider("weworkremotely")
        .with_external_id(slug_hash_or_url_hash(url, url.last_segment()))
}

/// `/company/<company>/remote-job/<title-slug>`
///
/// The slug only feeds the external id; no title is derived from it.
pub fn dynamitejobs(url: &NormalizedUrl) -> RawExtraction {
    let company = url.segment_after("company").unwrap_or_default();
    let title_slug = url
        .segment_after("remote-job")
        .or_else(|| url.last_segment());

    RawExtraction::for_provider("dynamitejobs")
        .with_company(company)
        .with_external_id(stable_hash(title_slug.unwrap_or("dynamitejobs")))
}

/// `/jobs/view/<digits>`
pub fn linkedin(url: &NormalizedUrl) -> RawExtraction {
    let id = url.segment_after("view").or_else(|| url.last_segment());
    RawExtraction::for_provider("linkedin")
        .with_external_id(id_or_url_hash(url, id, looks_like_numeric_id))
}

/// `/company/<company>/jobs/<id-slug>`
pub fn wellfound(url: &NormalizedUrl) -> RawExtraction {
    let id = url.segment_after("jobs").or_else(|| url.last_segment());
    let company = url.segment_after("company").unwrap_or_default();
    RawExtraction::for_provider("wellfound")
        .with_company(company)
        .with_external_id(slug_hash_or_url_hash(url, id))
}

pub fn remotive(url: &NormalizedUrl) -> RawExtraction {
    let id = url
        .segment_after("remote-jobs")
        .or_else(|| url.last_segment());
    RawExtraction::for_provider("remotive").with_external_id(slug_hash_or_url_hash(url, id))
}

pub fn ziprecruiter(url: &NormalizedUrl) -> RawExtraction {
    RawExtraction::for_provider("ziprecruiter")
        .with_external_id(id_or_url_hash(url, url.last_segment(), not_generic))
}

/// `/viewjob?jk=<key>` or `vjk=<key>` on search pages.
pub fn indeed(url: &NormalizedUrl) -> RawExtraction {
    let job_key = url
        .query_param("jk")
        .filter(|v| !v.is_empty())
        .or_else(|| url.query_param("vjk").filter(|v| !v.is_empty()));
    let id = job_key.or_else(|| url.last_segment());
    RawExtraction::for_provider("indeed").with_external_id(id_or_url_hash(url, id, any_id))
}

pub fn stepstone(url: &NormalizedUrl) -> RawExtraction {
    RawExtraction::for_provider("stepstone")
        .with_external_id(id_or_url_hash(url, url.last_segment(), looks_like_alnum_id))
}

pub fn xing(url: &NormalizedUrl) -> RawExtraction {
    let id = url.segment_after("jobs").or_else(|| url.last_segment());
    RawExtraction::for_provider("xing").with_external_id(slug_hash_or_url_hash(url, id))
}

pub fn glassdoor(url: &NormalizedUrl) -> RawExtraction {
    let id = url.segment_after("job").or_else(|| url.last_segment());
    RawExtraction::for_provider("glassdoor")
        .with_external_id(id_or_url_hash(url, id, looks_like_alnum_id))
}

pub fn monster(url: &NormalizedUrl) -> RawExtraction {
    RawExtraction::for_provider("monster")
        .with_external_id(id_or_url_hash(url, url.last_segment(), looks_like_alnum_id))
}

pub fn reed(url: &NormalizedUrl) -> RawExtraction {
    last_segment_board("reed", url)
}

pub fn totaljobs(url: &NormalizedUrl) -> RawExtraction {
    last_segment_board("totaljobs", url)
}

pub fn cv_library(url: &NormalizedUrl) -> RawExtraction {
    last_segment_board("cv-library", url)
}

pub fn nofluffjobs(url: &NormalizedUrl) -> RawExtraction {
    last_segment_board("nofluffjobs", url)
}

pub fn pracuj(url: &NormalizedUrl) -> RawExtraction {
    last_segment_board("pracuj", url)
}

fn last_segment_board(provider: &str, url: &NormalizedUrl) -> RawExtraction {
    RawExtraction::for_provider(provider)
        .with_external_id(id_or_url_hash(url, url.last_segment(), any_id))
}

/// Applicant-tracking system: `/companies/<company>/<numeric-id>-<slug>`
pub fn join(url: &NormalizedUrl) -> RawExtraction {
    let company = url.segment_after("companies").unwrap_or_default();
    let segment = url.last_segment().unwrap_or_default();

    let external_id = match NUMERIC_SLUG_PREFIX.captures(segment) {
        Some(caps) => caps[1].to_string(),
        None if !looks_like_alnum_id(segment) || is_generic_path_word(segment) => url_hash(url),
        None => segment.to_string(),
    };

    RawExtraction::for_provider("join")
        .with_tenant(company)
        .with_company(company)
        .with_external_id(external_id)
}

/// `<tenant>.wd<N>.myworkdayjobs.com/<locale>/<site>/job/<id>`
pub fn workday(url: &NormalizedUrl) -> RawExtraction {
    let company = url.first_label();
    RawExtraction::for_provider("workday")
        .with_tenant(company)
        .with_company(company)
        .with_external_id(id_or_url_hash(url, url.last_segment(), not_generic))
}

/// `boards.greenhouse.io/boards/<company>/jobs/<digits>`
pub fn greenhouse(url: &NormalizedUrl) -> RawExtraction {
    let company = url.segment_after("boards").unwrap_or_default();
    let id = url.segment_after("jobs").or_else(|| url.last_segment());
    RawExtraction::for_provider("greenhouse")
        .with_tenant(company)
        .with_company(company)
        .with_external_id(id_or_url_hash(url, id, looks_like_numeric_id))
}

/// `<company>.lever.co/jobs/<id>`
pub fn lever(url: &NormalizedUrl) -> RawExtraction {
    let company = url.host().replacen(".lever.co", "", 1);
    let id = url.segment_after("jobs").or_else(|| url.last_segment());
    RawExtraction::for_provider("lever")
        .with_tenant(&company)
        .with_company(&company)
        .with_external_id(id_or_url_hash(url, id, any_id))
}

pub fn personio(url: &NormalizedUrl) -> RawExtraction {
    let company = url.first_label();
    RawExtraction::for_provider("personio")
        .with_tenant(company)
        .with_company(company)
        .with_external_id(id_or_url_hash(url, url.last_segment(), looks_like_alnum_id))
}

/// `jobs.smartrecruiters.com/<Company>/<id>-<slug>`; older links use
/// `/SmartRecruiters/<company>` or `/company/<company>`.
pub fn smartrecruiters(url: &NormalizedUrl) -> RawExtraction {
    let company = url
        .segment_after("SmartRecruiters")
        .or_else(|| url.segment_after("company"))
        .unwrap_or_default();
    let id = url.segment_after("job").or_else(|| url.last_segment());
    RawExtraction::for_provider("smartrecruiters")
        .with_tenant(company)
        .with_company(company)
        .with_external_id(id_or_url_hash(url, id, any_id))
}

/// `*.workable.com` carries the tenant as subdomain; `*.applytojob.com` does not.
pub fn workable(url: &NormalizedUrl) -> RawExtraction {
    let company = if url.host().contains(".workable.com") {
        url.first_label()
    } else {
        ""
    };
    RawExtraction::for_provider("workable")
        .with_tenant(company)
        .with_company(company)
        .with_external_id(id_or_url_hash(url, url.last_segment(), any_id))
}

pub fn icims(url: &NormalizedUrl) -> RawExtraction {
    let id = url.segment_after("jobs").or_else(|| url.last_segment());
    RawExtraction::for_provider("icims").with_external_id(id_or_url_hash(url, id, any_id))
}

/// `jobs.jobvite.com/<company>/job/<id>` or `<company>.jobvite.com/...`
pub fn jobvite(url: &NormalizedUrl) -> RawExtraction {
    let label = url.first_label();
    let tenant = if label == "jobvite" { "" } else { label };
    RawExtraction::for_provider("jobvite")
        .with_tenant(tenant)
        .with_company(tenant)
        .with_external_id(id_or_url_hash(url, url.last_segment(), any_id))
}

pub fn teamtailor(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("teamtailor", url)
}

pub fn jazzhr(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("jazzhr", url)
}

pub fn ashby(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("ashby", url)
}

pub fn recruitee(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("recruitee", url)
}

pub fn bamboohr(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("bamboohr", url)
}

pub fn breezyhr(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("breezyhr", url)
}

pub fn comeet(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("comeet", url)
}

pub fn pinpoint(url: &NormalizedUrl) -> RawExtraction {
    subdomain_tenant_ats("pinpoint", url)
}

/// Tenant and company are the leftmost host label, id is the last segment.
fn subdomain_tenant_ats(provider: &str, url: &NormalizedUrl) -> RawExtraction {
    let company = url.first_label();
    RawExtraction::for_provider(provider)
        .with_tenant(company)
        .with_company(company)
        .with_external_id(id_or_url_hash(url, url.last_segment(), any_id))
}
