use crate::catalog::{LabelKind, MilestoneKind};

pub const DEFAULT_REPO: &str = "golang/go";
pub const DEFAULT_PROJECT: &str = "go.googlesource.com/go";

pub const CODE_REVIEW: &str = "Code-Review";
/// Code-Review vote that blocks submission.
pub const CODE_REVIEW_BLOCK: i32 = -2;

pub const UPDATED_DATE_FORMAT: &str = "%Y-%m-%d";

/// GitHub label ids of the golang/go repo.
///
/// Extract using:
///     curl -sn https://api.github.com/repos/golang/go/labels/$LABELNAME | jq .id
pub const GOLANG_LABELS: &[(i64, LabelKind)] = &[
    (150880249, LabelKind::Go2),
    (150880209, LabelKind::Documentation),
    (626114143, LabelKind::EarlyInCycle),
    (373540105, LabelKind::FeatureRequest),
    (150880243, LabelKind::HelpWanted),
    (373401956, LabelKind::NeedsDecision),
    (373399998, LabelKind::NeedsFix),
    (373402289, LabelKind::NeedsInvestigation),
    (150880191, LabelKind::Performance),
    (236419512, LabelKind::Proposal),
    (477156222, LabelKind::ProposalHold),
    (626114820, LabelKind::ReleaseBlocker),
    (936464699, LabelKind::Soon),
    (150880205, LabelKind::Testing),
    (358732225, LabelKind::ToolSpeed),
    (357033853, LabelKind::WaitingForInfo),
    (398069301, LabelKind::FrozenDueToAge),
];

/// GitHub milestone numbers of the golang/go repo.
pub const GOLANG_MILESTONES: &[(i32, MilestoneKind)] = &[
    (6, MilestoneKind::Unplanned),
    (22, MilestoneKind::Unreleased),
    (30, MilestoneKind::Proposal),
    (72, MilestoneKind::Go2),
    (23, MilestoneKind::Gccgo),
    (100, MilestoneKind::Gollvm),
];
