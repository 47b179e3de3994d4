//! Skill vocabulary and term extraction for CV / JD texts.

use std::collections::BTreeSet;

/// Known skills as (canonical name, lowercase aliases).
/// Order here is the order skills are reported in.
const SKILL_VOCABULARY: &[(&str, &[&str])] = &[
    ("Python", &["python"]),
    ("Java", &["java"]),
    ("JavaScript", &["javascript"]),
    ("TypeScript", &["typescript"]),
    ("Rust", &["rust"]),
    ("Go", &["golang"]),
    ("C++", &["c++", "cpp"]),
    ("C#", &["c#", "csharp"]),
    ("Ruby", &["ruby"]),
    ("PHP", &["php"]),
    ("Kotlin", &["kotlin"]),
    ("Swift", &["swift"]),
    ("Scala", &["scala"]),
    ("SQL", &["sql"]),
    ("PostgreSQL", &["postgresql", "postgres"]),
    ("MySQL", &["mysql"]),
    ("MongoDB", &["mongodb", "mongo"]),
    ("Redis", &["redis"]),
    ("Django", &["django"]),
    ("Flask", &["flask"]),
    ("FastAPI", &["fastapi"]),
    ("Spring", &["spring", "spring boot"]),
    ("React", &["react", "react.js", "reactjs"]),
    ("Vue", &["vue", "vue.js", "vuejs"]),
    ("Angular", &["angular"]),
    ("Node.js", &["node.js", "nodejs"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
    ("AWS", &["aws", "amazon web services"]),
    ("GCP", &["gcp", "google cloud"]),
    ("Azure", &["azure"]),
    ("Terraform", &["terraform"]),
    ("Linux", &["linux"]),
    ("Git", &["git"]),
    ("CI/CD", &["ci/cd", "cicd", "continuous integration"]),
    ("REST APIs", &["rest api", "rest apis", "restful"]),
    ("GraphQL", &["graphql"]),
    ("Kafka", &["kafka"]),
    ("Spark", &["spark"]),
    ("Machine Learning", &["machine learning", "ml"]),
    ("Data Analysis", &["data analysis", "data analytics"]),
    ("Pandas", &["pandas"]),
    ("NumPy", &["numpy"]),
    ("TensorFlow", &["tensorflow"]),
    ("PyTorch", &["pytorch"]),
    ("Backend", &["backend", "back-end", "back end"]),
    ("Frontend", &["frontend", "front-end", "front end"]),
    ("Microservices", &["microservices", "microservice"]),
    ("Agile", &["agile", "scrum"]),
    ("Testing", &["unit testing", "tdd", "testing"]),
    ("Communication", &["communication"]),
    ("Leadership", &["leadership"]),
];

/// Words ignored when measuring vocabulary overlap.
const STOPWORDS: &[&str] = &[
    "and", "are", "but", "can", "for", "from", "has", "have", "into", "its", "our", "that",
    "the", "their", "this", "was", "who", "will", "with", "you", "your", "years", "year",
    "looking", "required", "requirements", "preferred", "plus", "experience", "work",
    "working", "team", "role", "job", "strong", "good", "ability",
];

/// Returns the canonical names of every known skill mentioned in `text`,
/// in vocabulary order and without duplicates.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|(_, aliases)| aliases.iter().any(|a| contains_term(&lowered, a)))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Distinct lowercase content words (3+ chars, not stopwords).
pub fn content_words(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|w| w.chars().count() >= 3 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Whole-term match: the term may not be glued to a neighbouring word character.
/// `+` and `#` count as word characters so `c` never matches inside `c++`.
fn contains_term(haystack: &str, term: &str) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '+' || c == '#';
    haystack.match_indices(term).any(|(start, _)| {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word(c));
        let after_ok = haystack[start + term.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word(c));
        before_ok && after_ok
    })
}
