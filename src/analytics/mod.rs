//! Progress analytics and certification readiness
//!
//! Pure functions over repository snapshots. The analyzer holds only a
//! reference to the skill repository, needed to resolve passing scores.
//!
//! Completion everywhere in this module means "current score >= the skill's
//! configured passing score". The fixed 70-point status label on a progress
//! record plays no part in these computations.

use serde::Serialize;

use crate::model::{ProgressStatus, Skill, Student, TrainingProgram};
use crate::repo::SkillRepository;

/// Certification readiness verdict for one student and one program.
#[derive(Debug, Clone, Serialize)]
pub struct CertificationReadiness {
    pub student_id: i64,
    pub program_id: i64,
    pub completed_skills: Vec<Skill>,
    pub incomplete_skills: Vec<Skill>,
    pub readiness_percentage: f64,
    pub is_ready: bool,
}

/// Every skill in the system, classified into exactly one bucket.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub student_id: i64,
    pub completed: Vec<ScoredSkill>,
    pub in_progress: Vec<ScoredSkill>,
    pub not_started: Vec<Skill>,
    pub overall_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredSkill {
    pub skill: Skill,
    pub score: i64,
}

/// A failing skill and how far the student is from passing it.
#[derive(Debug, Clone, Serialize)]
pub struct AttentionItem {
    pub skill: Skill,
    pub score: i64,
    pub gap: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentProgress {
    pub student_id: i64,
    pub name: String,
    pub progress: f64,
}

/// Class-wide aggregates. Zero-valued for an empty class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassStatistics {
    pub total_students: usize,
    pub average_progress: f64,
    pub highest_progress: f64,
    pub lowest_progress: f64,
    pub top_performers: Vec<StudentProgress>,
    pub needing_support: Vec<StudentProgress>,
}

pub struct ProgressAnalyzer<'a> {
    skills: &'a SkillRepository,
}

impl<'a> ProgressAnalyzer<'a> {
    pub fn new(skills: &'a SkillRepository) -> Self {
        Self { skills }
    }

    /// Percentage of all skills known to the system the student has completed.
    /// 0 when no skills exist.
    pub fn overall_progress(&self, student: &Student) -> f64 {
        let all_skills = self.skills.all();
        if all_skills.is_empty() {
            return 0.0;
        }

        let completed = all_skills
            .iter()
            .filter(|skill| {
                student
                    .skill_progress(skill.id)
                    .is_some_and(|p| p.is_completed(skill.passing_score))
            })
            .count();

        completed as f64 / all_skills.len() as f64 * 100.0
    }

    /// Partition a program's required skills into completed and incomplete and
    /// derive the readiness verdict. Required ids that no longer resolve to a
    /// skill are skipped.
    pub fn certification_readiness(
        &self,
        student: &Student,
        program: &TrainingProgram,
    ) -> CertificationReadiness {
        let mut completed_skills = Vec::new();
        let mut incomplete_skills = Vec::new();

        for &skill_id in &program.required_skill_ids {
            let Some(skill) = self.skills.get(skill_id) else {
                continue;
            };
            let done = student
                .skill_progress(skill_id)
                .is_some_and(|p| p.is_completed(skill.passing_score));
            if done {
                completed_skills.push(skill.clone());
            } else {
                incomplete_skills.push(skill.clone());
            }
        }

        // Denominator is the full required list, dangling ids included
        let required = program.required_skill_ids.len();
        let readiness_percentage = if required > 0 {
            completed_skills.len() as f64 / required as f64 * 100.0
        } else {
            0.0
        };
        let is_ready = readiness_percentage >= program.minimum_passing_percentage as f64;

        CertificationReadiness {
            student_id: student.id,
            program_id: program.id,
            completed_skills,
            incomplete_skills,
            readiness_percentage,
            is_ready,
        }
    }

    /// Classify every skill in the system for one student.
    pub fn progress_summary(&self, student: &Student) -> ProgressSummary {
        let all_skills = self.skills.all();
        let mut completed = Vec::new();
        let mut in_progress = Vec::new();
        let mut not_started = Vec::new();

        for skill in all_skills {
            match student.skill_progress(skill.id) {
                None => not_started.push(skill.clone()),
                Some(p) if p.status == ProgressStatus::NotStarted => {
                    not_started.push(skill.clone());
                }
                Some(p) if p.is_completed(skill.passing_score) => completed.push(ScoredSkill {
                    skill: skill.clone(),
                    score: p.current_score,
                }),
                Some(p) => in_progress.push(ScoredSkill {
                    skill: skill.clone(),
                    score: p.current_score,
                }),
            }
        }

        let overall_percentage = if all_skills.is_empty() {
            0.0
        } else {
            completed.len() as f64 / all_skills.len() as f64 * 100.0
        };

        ProgressSummary {
            student_id: student.id,
            completed,
            in_progress,
            not_started,
            overall_percentage,
        }
    }

    /// Failing skills ordered by descending gap to the passing score, truncated
    /// to `count`. A skill with no progress record counts as score 0. The sort
    /// is stable, so gap ties keep skill enumeration order.
    pub fn skills_needing_attention(&self, student: &Student, count: usize) -> Vec<AttentionItem> {
        let mut items: Vec<AttentionItem> = self
            .skills
            .all()
            .iter()
            .filter_map(|skill| {
                let score = student
                    .skill_progress(skill.id)
                    .map_or(0, |p| p.current_score);
                if score < skill.passing_score {
                    Some(AttentionItem {
                        skill: skill.clone(),
                        score,
                        gap: skill.passing_score - score,
                    })
                } else {
                    None
                }
            })
            .collect();

        items.sort_by(|a, b| b.gap.cmp(&a.gap));
        items.truncate(count);
        items
    }

    /// Class-wide statistics over a set of students. Empty input yields the
    /// zero-valued result.
    pub fn class_statistics(&self, students: &[Student]) -> ClassStatistics {
        if students.is_empty() {
            return ClassStatistics::default();
        }

        let mut ranked: Vec<StudentProgress> = students
            .iter()
            .map(|s| StudentProgress {
                student_id: s.id,
                name: s.name.clone(),
                progress: self.overall_progress(s),
            })
            .collect();
        ranked.sort_by(|a, b| b.progress.total_cmp(&a.progress));

        let total = ranked.len();
        let average = ranked.iter().map(|r| r.progress).sum::<f64>() / total as f64;
        let highest = ranked.first().map_or(0.0, |r| r.progress);
        let lowest = ranked.last().map_or(0.0, |r| r.progress);
        let needing_support = ranked
            .iter()
            .filter(|r| r.progress < 50.0)
            .cloned()
            .collect();
        let top_performers = ranked.into_iter().take(3).collect();

        ClassStatistics {
            total_students: total,
            average_progress: average,
            highest_progress: highest,
            lowest_progress: lowest,
            top_performers,
            needing_support,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::StudentRepository;

    fn skills_fixture() -> SkillRepository {
        let mut repo = SkillRepository::new();
        repo.add("A", "", "Core", 70).unwrap(); // id 1
        repo.add("B", "", "Core", 70).unwrap(); // id 2
        repo.add("C", "", "Core", 70).unwrap(); // id 3
        repo.add("D", "", "Core", 70).unwrap(); // id 4
        repo
    }

    fn student(progress: &[(i64, i64)]) -> Student {
        let mut s = Student::new(1, "Ada", "ada@example.com").unwrap();
        for &(skill_id, score) in progress {
            s.update_skill_progress(skill_id, score).unwrap();
        }
        s
    }

    // =========================================================================
    // Overall progress
    // =========================================================================

    #[test]
    fn overall_progress_is_zero_without_skills() {
        let repo = SkillRepository::new();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[]);
        assert_eq!(analyzer.overall_progress(&s), 0.0);
    }

    #[test]
    fn overall_progress_all_passed_is_exactly_100() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[(1, 90), (2, 70), (3, 100), (4, 85)]);
        assert_eq!(analyzer.overall_progress(&s), 100.0);
    }

    #[test]
    fn overall_progress_counts_against_all_known_skills() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        // Touched only one of four skills
        let s = student(&[(1, 90)]);
        assert_eq!(analyzer.overall_progress(&s), 25.0);
    }

    #[test]
    fn completion_uses_skill_threshold_not_status_boundary() {
        let mut repo = SkillRepository::new();
        repo.add("Easy", "", "Core", 50).unwrap();
        let analyzer = ProgressAnalyzer::new(&repo);
        // 55 passes the skill (>= 50) even though the status label is
        // still InProgress (< 70)
        let s = student(&[(1, 55)]);
        assert_eq!(analyzer.overall_progress(&s), 100.0);
        let summary = analyzer.progress_summary(&s);
        assert_eq!(summary.completed.len(), 1);
    }

    // =========================================================================
    // Certification readiness
    // =========================================================================

    fn program(required: &[i64], minimum: i64) -> TrainingProgram {
        let mut p = TrainingProgram::new(1, "Track", "", minimum).unwrap();
        for &id in required {
            p.add_required_skill(id);
        }
        p
    }

    #[test]
    fn readiness_partitions_required_skills() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[(1, 90), (2, 30)]);
        let p = program(&[1, 2, 3], 100);

        let readiness = analyzer.certification_readiness(&s, &p);
        assert_eq!(readiness.completed_skills.len(), 1);
        assert_eq!(readiness.incomplete_skills.len(), 2);
        assert!((readiness.readiness_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!(!readiness.is_ready);
    }

    #[test]
    fn readiness_skips_dangling_skill_ids() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[(1, 90)]);
        let p = program(&[1, 99], 50);

        let readiness = analyzer.certification_readiness(&s, &p);
        assert_eq!(readiness.completed_skills.len(), 1);
        assert_eq!(readiness.incomplete_skills.len(), 0);
        assert_eq!(readiness.readiness_percentage, 50.0);
        assert!(readiness.is_ready);
    }

    #[test]
    fn readiness_with_no_required_skills_is_zero() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[]);
        let p = program(&[], 0);
        let readiness = analyzer.certification_readiness(&s, &p);
        assert_eq!(readiness.readiness_percentage, 0.0);
        // 0 >= 0: vacuously ready
        assert!(readiness.is_ready);
    }

    #[test]
    fn readiness_is_monotonic_in_passing_records() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let p = program(&[1, 2, 3, 4], 100);

        let mut s = student(&[(1, 90)]);
        let before = analyzer.certification_readiness(&s, &p).readiness_percentage;
        s.update_skill_progress(2, 85).unwrap();
        let after = analyzer.certification_readiness(&s, &p).readiness_percentage;
        assert!(after >= before);
    }

    // =========================================================================
    // Progress summary
    // =========================================================================

    #[test]
    fn summary_buckets_are_exhaustive_and_disjoint() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[(1, 90), (2, 40)]);
        let summary = analyzer.progress_summary(&s);

        assert_eq!(summary.completed.len(), 1);
        assert_eq!(summary.in_progress.len(), 1);
        assert_eq!(summary.not_started.len(), 2);
        assert_eq!(summary.overall_percentage, 25.0);
    }

    #[test]
    fn zero_score_record_counts_as_not_started() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[(1, 0)]);
        let summary = analyzer.progress_summary(&s);
        assert_eq!(summary.not_started.len(), 4);
    }

    // =========================================================================
    // Skills needing attention
    // =========================================================================

    #[test]
    fn attention_orders_by_descending_gap() {
        let mut repo = SkillRepository::new();
        repo.add("A", "", "Core", 70).unwrap();
        repo.add("B", "", "Core", 70).unwrap();
        repo.add("C", "", "Core", 70).unwrap();
        repo.add("D", "", "Core", 70).unwrap();
        let analyzer = ProgressAnalyzer::new(&repo);
        // gaps: A=30, B=10, C=20; D passes
        let s = student(&[(1, 40), (2, 60), (3, 50), (4, 95)]);

        let items = analyzer.skills_needing_attention(&s, 3);
        let names: Vec<&str> = items.iter().map(|i| i.skill.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
        assert_eq!(items[0].gap, 30);
    }

    #[test]
    fn untouched_skill_reports_full_gap() {
        let mut repo = SkillRepository::new();
        repo.add("SQL", "", "Programming", 65).unwrap();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[]);

        assert!(s.skill_progress(1).is_none());
        let items = analyzer.skills_needing_attention(&s, 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].score, 0);
        assert_eq!(items[0].gap, 65);
        assert_eq!(analyzer.overall_progress(&s), 0.0);
    }

    #[test]
    fn gap_ties_keep_enumeration_order() {
        let mut repo = SkillRepository::new();
        repo.add("First", "", "Core", 70).unwrap();
        repo.add("Second", "", "Core", 70).unwrap();
        let analyzer = ProgressAnalyzer::new(&repo);
        let s = student(&[(1, 30), (2, 30)]);
        let items = analyzer.skills_needing_attention(&s, 5);
        let names: Vec<&str> = items.iter().map(|i| i.skill.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    // =========================================================================
    // Class statistics
    // =========================================================================

    #[test]
    fn empty_class_yields_zeroed_statistics() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let stats = analyzer.class_statistics(&[]);
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.average_progress, 0.0);
        assert!(stats.top_performers.is_empty());
        assert!(stats.needing_support.is_empty());
    }

    #[test]
    fn class_statistics_ranks_and_flags_support() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);

        let mut students = Vec::new();
        // 100%, 50%, 25%, 0%
        let scores: [&[(i64, i64)]; 4] = [
            &[(1, 90), (2, 90), (3, 90), (4, 90)],
            &[(1, 90), (2, 90)],
            &[(1, 90)],
            &[],
        ];
        for (idx, progress) in scores.iter().enumerate() {
            let mut s = Student::new(idx as i64 + 1, format!("S{idx}"), "s@example.com").unwrap();
            for &(skill_id, score) in progress.iter() {
                s.update_skill_progress(skill_id, score).unwrap();
            }
            students.push(s);
        }

        let stats = analyzer.class_statistics(&students);
        assert_eq!(stats.total_students, 4);
        assert_eq!(stats.highest_progress, 100.0);
        assert_eq!(stats.lowest_progress, 0.0);
        assert_eq!(stats.average_progress, 43.75);
        assert_eq!(stats.top_performers.len(), 3);
        assert_eq!(stats.top_performers[0].progress, 100.0);
        // Strictly below 50%
        let support_ids: Vec<i64> = stats.needing_support.iter().map(|r| r.student_id).collect();
        assert_eq!(support_ids, vec![3, 4]);
    }

    #[test]
    fn class_statistics_are_deterministic_for_ties() {
        let repo = skills_fixture();
        let analyzer = ProgressAnalyzer::new(&repo);
        let a = Student::new(1, "A", "a@example.com").unwrap();
        let b = Student::new(2, "B", "b@example.com").unwrap();
        let stats = analyzer.class_statistics(&[a, b]);
        // Stable sort keeps input order on equal progress
        assert_eq!(stats.top_performers[0].student_id, 1);
        assert_eq!(stats.top_performers[1].student_id, 2);
    }

    #[test]
    fn uses_student_repository_snapshot() {
        // all() order feeds enumeration-order guarantees used above
        let mut repo = StudentRepository::new();
        repo.add("Ada", "ada@example.com").unwrap();
        repo.add("Brian", "brian@example.com").unwrap();
        let skills = SkillRepository::new();
        let analyzer = ProgressAnalyzer::new(&skills);
        let stats = analyzer.class_statistics(repo.all());
        assert_eq!(stats.total_students, 2);
    }
}
