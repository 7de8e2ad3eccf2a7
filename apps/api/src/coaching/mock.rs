//! Mock Content Generator: deterministic-shaped, randomized-content stand-ins
//! for every coaching flow, used whenever the generation backend is
//! unconfigured or fails.
//!
//! Selection is an exact-match lookup over a small set of role archetypes;
//! anything unrecognized falls through to a generic template that
//! interpolates the literal category string. The fallback cannot fail,
//! whatever the input.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::coaching::scoring;
use crate::models::analysis::{FeedbackItem, FeedbackKind, ResumeAnalysisResult};
use crate::models::cover_letter::CoverLetterRequest;
use crate::models::interview::InterviewTurn;

// ────────────────────────────────────────────────────────────────────────────
// Role archetypes
// ────────────────────────────────────────────────────────────────────────────

/// The known interview categories. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArchetype {
    SoftwareEngineer,
    ProductManager,
    Other,
}

impl RoleArchetype {
    /// Exact-match lookup; unknown strings select the generic catalog.
    pub fn from_role(job_role: &str) -> Self {
        match job_role {
            "software-engineer" => RoleArchetype::SoftwareEngineer,
            "product-manager" => RoleArchetype::ProductManager,
            _ => RoleArchetype::Other,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview catalogs
// ────────────────────────────────────────────────────────────────────────────

const SOFTWARE_ENGINEER_INTRO: &str = "Hello! I'm Alex, a technical interviewer. Today, I'll be \
    conducting your mock interview for the Software Engineer position. We'll cover some technical \
    concepts and problem-solving scenarios. Let's start with something straightforward: Could you \
    explain the difference between REST and GraphQL APIs, and when you might choose one over the \
    other?";

const PRODUCT_MANAGER_INTRO: &str = "Hi there! I'm Jordan, and I'll be your interviewer today for \
    the Product Manager position. I'd like to understand your approach to product development and \
    decision-making. To start, could you walk me through how you would prioritize features for a \
    new product release?";

const SOFTWARE_ENGINEER_QUESTIONS: &[&str] = &[
    "Can you describe a challenging technical problem you've solved recently? What was your approach?",
    "How do you ensure your code is maintainable and scalable?",
    "Explain how you would design a distributed system for high availability.",
    "What's your experience with CI/CD pipelines?",
    "How do you approach debugging a complex issue in production?",
];

const PRODUCT_MANAGER_QUESTIONS: &[&str] = &[
    "How do you gather and incorporate user feedback into your product decisions?",
    "Describe a situation where you had to make a difficult trade-off between features and timeline.",
    "How do you measure the success of a product feature after launch?",
    "Walk me through how you would create a product roadmap.",
    "How do you collaborate with engineering and design teams?",
];

const GENERAL_QUESTIONS: &[&str] = &[
    "Tell me about a time when you faced a significant challenge in your work. How did you overcome it?",
    "How do you handle disagreements with team members?",
    "What's your approach to learning new skills or technologies?",
    "Describe your ideal work environment.",
    "Where do you see yourself professionally in 5 years?",
];

const SOFTWARE_ENGINEER_SUGGESTIONS: &[&str] = &[
    "Try to include more specific technical details in your response.",
    "Consider discussing the trade-offs of different approaches.",
    "Mention specific tools or technologies you've used to solve similar problems.",
    "Structure your answer with a clear problem statement, approach, and outcome.",
    "Include metrics or performance improvements when discussing technical solutions.",
];

const PRODUCT_MANAGER_SUGGESTIONS: &[&str] = &[
    "Include more data-driven decision making in your response.",
    "Consider addressing how you would handle stakeholder management.",
    "Mention specific methodologies you've used (e.g., Agile, Scrum).",
    "Discuss how you balance user needs with business objectives.",
    "Include examples of how you've prioritized competing features.",
];

const GENERAL_SUGGESTIONS: &[&str] = &[
    "Try to be more concise while still providing complete information.",
    "Use the STAR method (Situation, Task, Action, Result) to structure your response.",
    "Include a specific example to illustrate your point.",
    "Consider addressing potential follow-up questions in your initial response.",
    "Highlight your unique perspective or approach to the situation.",
];

/// The interviewer's opening line for a role. Unknown roles get the generic
/// greeting with the literal role string interpolated.
pub fn interview_intro(job_role: &str) -> String {
    match RoleArchetype::from_role(job_role) {
        RoleArchetype::SoftwareEngineer => SOFTWARE_ENGINEER_INTRO.to_string(),
        RoleArchetype::ProductManager => PRODUCT_MANAGER_INTRO.to_string(),
        RoleArchetype::Other => format!(
            "Hello! I'm Taylor, and I'll be conducting your mock interview for the {job_role} \
             position today. Let's start with a common question: Could you tell me about your \
             background and why you're interested in this role?"
        ),
    }
}

/// Picks the next follow-up question from the role's fixed bank.
pub fn next_question<R: Rng>(rng: &mut R, job_role: &str) -> String {
    let bank = match RoleArchetype::from_role(job_role) {
        RoleArchetype::SoftwareEngineer => SOFTWARE_ENGINEER_QUESTIONS,
        RoleArchetype::ProductManager => PRODUCT_MANAGER_QUESTIONS,
        RoleArchetype::Other => GENERAL_QUESTIONS,
    };
    // Banks are non-empty constants, so choose() cannot return None
    bank.choose(rng)
        .copied()
        .unwrap_or("Could you tell me more about that?")
        .to_string()
}

/// The fixed suggestion candidate list for a role.
pub fn suggestion_pool(job_role: &str) -> &'static [&'static str] {
    match RoleArchetype::from_role(job_role) {
        RoleArchetype::SoftwareEngineer => SOFTWARE_ENGINEER_SUGGESTIONS,
        RoleArchetype::ProductManager => PRODUCT_MANAGER_SUGGESTIONS,
        RoleArchetype::Other => GENERAL_SUGGESTIONS,
    }
}

/// Builds one full simulated interviewer turn. First turns get the canned
/// introduction and no feedback; later turns get a drawn question plus a
/// simulated feedback record.
pub fn mock_interview_turn<R: Rng>(
    rng: &mut R,
    job_role: &str,
    is_first_message: bool,
) -> InterviewTurn {
    if is_first_message {
        InterviewTurn {
            message: interview_intro(job_role),
            feedback: None,
        }
    } else {
        InterviewTurn {
            message: next_question(rng, job_role),
            feedback: Some(scoring::draw_feedback(rng, suggestion_pool(job_role))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

/// Assembles a templated cover letter from the request fields. The bracketed
/// placeholders are intentional: they mark the spots a real letter would
/// tailor, and the UI shows this text for the user to edit.
pub fn mock_cover_letter(request: &CoverLetterRequest) -> String {
    let date = Utc::now().format("%B %-d, %Y");
    let CoverLetterRequest {
        name,
        email,
        phone,
        company,
        position,
        ..
    } = request;

    format!(
        "{name}\n{email}\n{phone}\n{date}\n\nHiring Manager\n{company}\n\nDear Hiring Manager,\n\n\
        I am writing to express my interest in the {position} position at {company}. With my \
        background in [relevant field] and passion for [relevant industry/skill], I believe I \
        would be a valuable addition to your team.\n\n\
        Throughout my career, I have developed strong skills in [relevant skill 1], [relevant \
        skill 2], and [relevant skill 3]. My experience has taught me how to [relevant \
        accomplishment or responsibility], resulting in [positive outcome]. I am particularly \
        drawn to {company}'s commitment to [company value or achievement mentioned in job \
        description], which aligns perfectly with my professional values.\n\n\
        In my previous role at [Previous Company], I successfully [specific achievement relevant \
        to the job description]. This experience has prepared me well for the challenges of the \
        {position} role, where I can contribute to [specific project or goal mentioned in job \
        description].\n\n\
        I am excited about the opportunity to bring my unique perspective and skills to \
        {company}. Thank you for considering my application. I look forward to discussing how my \
        experience would benefit {company} as your next {position}.\n\n\
        Sincerely,\n\n{name}"
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Resume analysis
// ────────────────────────────────────────────────────────────────────────────

/// Builds a full simulated analysis: drawn scores plus fixed feedback lists.
pub fn mock_resume_analysis<R: Rng>(rng: &mut R) -> ResumeAnalysisResult {
    let scores = scoring::draw_resume_scores(rng);

    ResumeAnalysisResult {
        overall_score: scores.overall,
        ats_score: scores.ats,
        content_score: scores.content,
        formatting_score: scores.formatting,
        summary: "Your resume presents a clear professional story with steady progression and a \
            solid skills inventory. The experience section reads well, but several bullets \
            describe responsibilities rather than outcomes. Quantifying your impact and \
            tightening the summary would strengthen both recruiter impressions and ATS matching."
            .to_string(),
        key_improvements: vec![
            "Add measurable outcomes (percentages, revenue, time saved) to your top bullets."
                .to_string(),
            "Lead each bullet with a strong action verb instead of a role description.".to_string(),
            "Mirror key terms from the target job description in your skills section.".to_string(),
            "Trim the professional summary to three sentences focused on your strongest claim."
                .to_string(),
        ],
        content_feedback: vec![
            FeedbackItem {
                title: "Clear career progression".to_string(),
                description: "Your roles build on each other logically, which makes the \
                    narrative easy to follow."
                    .to_string(),
                kind: FeedbackKind::Positive,
            },
            FeedbackItem {
                title: "Bullets lack quantified impact".to_string(),
                description: "Most experience bullets describe duties. Recruiters scan for \
                    numbers; add metrics where you can."
                    .to_string(),
                kind: FeedbackKind::Negative,
            },
            FeedbackItem {
                title: "Summary is generic".to_string(),
                description: "The opening summary could apply to many candidates. Anchor it to \
                    your most distinctive accomplishment."
                    .to_string(),
                kind: FeedbackKind::Warning,
            },
        ],
        ats_feedback: vec![
            FeedbackItem {
                title: "Standard section headings".to_string(),
                description: "Experience, Education and Skills are all labeled conventionally, \
                    which parsers handle well."
                    .to_string(),
                kind: FeedbackKind::Positive,
            },
            FeedbackItem {
                title: "Missing role-specific keywords".to_string(),
                description: "Several terms that appear in typical job descriptions for your \
                    target role are absent. Work them into your bullets naturally."
                    .to_string(),
                kind: FeedbackKind::Warning,
            },
            FeedbackItem {
                title: "Dates parse cleanly".to_string(),
                description: "Consistent month-year date formatting keeps tracking systems from \
                    misreading your tenure."
                    .to_string(),
                kind: FeedbackKind::Info,
            },
        ],
        formatting_feedback: vec![
            FeedbackItem {
                title: "Consistent visual hierarchy".to_string(),
                description: "Headings, spacing and bullet styles are uniform throughout."
                    .to_string(),
                kind: FeedbackKind::Positive,
            },
            FeedbackItem {
                title: "Dense paragraphs in places".to_string(),
                description: "A few bullets run past two lines. Split or shorten them to keep \
                    the page scannable."
                    .to_string(),
                kind: FeedbackKind::Warning,
            },
            FeedbackItem {
                title: "Single-column layout".to_string(),
                description: "A single column is the safest choice for both human readers and \
                    parsing software."
                    .to_string(),
                kind: FeedbackKind::Info,
            },
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Example resumes (simulated extraction output)
// ────────────────────────────────────────────────────────────────────────────

/// Fixed stand-in for extracted PDF text.
pub const SAMPLE_RESUME_PDF: &str = "\
John Doe
Software Engineer
john.doe@example.com | (123) 456-7890 | linkedin.com/in/johndoe

SUMMARY
Software engineer with 5+ years of full-stack experience across React, Node.js and cloud \
platforms. Focused on building scalable services and mentoring junior engineers.

EXPERIENCE
Senior Software Engineer | Tech Solutions Inc. | Jan 2020 - Present
- Led development of a customer portal that lifted user engagement by 35%
- Introduced CI/CD pipelines that cut deployment time in half
- Reviewed code and mentored a team of four junior developers

Software Engineer | Digital Innovations | Mar 2017 - Dec 2019
- Built RESTful APIs with Node.js and Express serving 2M requests/day
- Shipped responsive web applications using React and Redux
- Partnered with UX designers on user-facing workflows

EDUCATION
B.S. Computer Science | University of Technology | 2013 - 2017

SKILLS
Languages: JavaScript, TypeScript, Python, Java
Frontend: React, Redux, HTML5, CSS3
Backend: Node.js, Express, MongoDB, PostgreSQL
Tools: Git, Docker, AWS, Jenkins, Jira";

/// Fixed stand-in for extracted DOCX text.
pub const SAMPLE_RESUME_DOCX: &str = "\
JANE SMITH
Product Manager
jane.smith@example.com | (987) 654-3210 | linkedin.com/in/janesmith

PROFESSIONAL SUMMARY
Product manager with 6+ years taking products from concept to launch, growing revenue and \
improving user satisfaction along the way.

WORK EXPERIENCE
Senior Product Manager | Innovative Products Co. | Jun 2019 - Present
- Drove a new SaaS product to $2M first-year revenue
- Led cross-functional teams of designers, engineers and marketers
- Ran market research and competitive analysis to surface new opportunities

Product Manager | Tech Enterprises | Aug 2016 - May 2019
- Owned the roadmap for a B2B platform with 50,000+ users
- Raised user retention 25% through feedback-driven feature work
- Built go-to-market strategies with sales and marketing

EDUCATION
MBA | Business University | 2014 - 2016
B.S. Information Technology | Tech University | 2010 - 2014

SKILLS
Product: Roadmapping, User Stories, Agile/Scrum, JIRA
Research: Market Analysis, User Research, A/B Testing
Business: Strategy, Pricing, Go-to-Market
Technical: SQL, HTML/CSS, API Design";

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_archetype_exact_match_only() {
        assert_eq!(
            RoleArchetype::from_role("software-engineer"),
            RoleArchetype::SoftwareEngineer
        );
        assert_eq!(
            RoleArchetype::from_role("product-manager"),
            RoleArchetype::ProductManager
        );
        // near-misses are not special-cased
        assert_eq!(
            RoleArchetype::from_role("Software-Engineer"),
            RoleArchetype::Other
        );
        assert_eq!(RoleArchetype::from_role(""), RoleArchetype::Other);
    }

    #[test]
    fn test_software_engineer_intro_literal() {
        let intro = interview_intro("software-engineer");
        assert!(intro.starts_with("Hello! I'm Alex, a technical interviewer."));
    }

    #[test]
    fn test_unknown_role_interpolates_literal_category() {
        let intro = interview_intro("quantum-basket-weaver");
        assert!(!intro.is_empty());
        assert!(intro.contains("quantum-basket-weaver"));
    }

    #[test]
    fn test_next_question_comes_from_role_bank() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let q = next_question(&mut rng, "software-engineer");
            assert!(SOFTWARE_ENGINEER_QUESTIONS.contains(&q.as_str()));
        }
        for _ in 0..100 {
            let q = next_question(&mut rng, "data-scientist");
            assert!(GENERAL_QUESTIONS.contains(&q.as_str()));
        }
    }

    #[test]
    fn test_first_turn_has_no_feedback() {
        let mut rng = StdRng::seed_from_u64(2);
        let turn = mock_interview_turn(&mut rng, "product-manager", true);
        assert!(turn.feedback.is_none());
        assert!(turn.message.starts_with("Hi there! I'm Jordan"));
    }

    #[test]
    fn test_later_turn_has_bounded_feedback_from_role_pool() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let turn = mock_interview_turn(&mut rng, "product-manager", false);
            let feedback = turn.feedback.expect("later turns carry feedback");
            assert!(feedback.validate().is_ok());
            for suggestion in &feedback.suggestions {
                assert!(PRODUCT_MANAGER_SUGGESTIONS.contains(&suggestion.as_str()));
            }
        }
    }

    #[test]
    fn test_mock_cover_letter_includes_request_fields() {
        let request = CoverLetterRequest {
            job_description: "Own the checkout flow.".to_string(),
            name: "Dana Lee".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(555) 010-7788".to_string(),
            company: "Acme Corp".to_string(),
            position: "Backend Engineer".to_string(),
        };
        let letter = mock_cover_letter(&request);
        assert!(letter.starts_with("Dana Lee\n"));
        assert!(letter.contains("Backend Engineer position at Acme Corp"));
        assert!(letter.ends_with("Dana Lee"));
    }

    #[test]
    fn test_mock_analysis_satisfies_invariants() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            let analysis = mock_resume_analysis(&mut rng);
            assert!(analysis.validate().is_ok());
            assert!(!analysis.key_improvements.is_empty());
            assert!(!analysis.content_feedback.is_empty());
            assert!(!analysis.ats_feedback.is_empty());
            assert!(!analysis.formatting_feedback.is_empty());
        }
    }

    #[test]
    fn test_sample_resumes_are_nonempty() {
        assert!(!SAMPLE_RESUME_PDF.trim().is_empty());
        assert!(!SAMPLE_RESUME_DOCX.trim().is_empty());
    }
}
