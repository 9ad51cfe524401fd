//! Translation of a dropped row into one-step move calls.
//!
//! The Admin API has no "set position" operation. A credential can only
//! be moved after a given predecessor or to the front, so a drop that
//! displaces a row by `n` slots becomes `n` moves per credential in the
//! row, issued one after another.

use kc_admin_client::{AdminClient, AdminClientResult};

use super::group::RowKey;

/// One move call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStep {
    /// Move the credential to the front of the list.
    Up {
        /// Credential to move.
        credential_id: String,
    },
    /// Move the credential to just after `new_previous_id`.
    Down {
        /// Credential to move.
        credential_id: String,
        /// Credential that will precede it.
        new_previous_id: String,
    },
}

/// Calls needed to persist a drop, in issue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderPlan {
    /// Signed slot displacement of the dragged row.
    pub displacement: isize,
    /// Calls to issue.
    pub steps: Vec<MoveStep>,
}

impl ReorderPlan {
    /// Plans the calls moving `dragged` from its slot in `item_order` to
    /// its slot in `new_order`.
    ///
    /// The row is walked one slot at a time over a simulated copy of the
    /// order. Moving down, the first credential of the row is placed after
    /// the last credential of the row it passes, and each further credential
    /// after the one before it. Moving up, every credential of the row is
    /// moved to the front, last member first, so the row keeps its internal
    /// order. Passing a row made only of the dragged credentials
    /// (a group passing its own expanded members) changes nothing on the
    /// server and issues no call.
    #[must_use]
    pub fn new(item_order: &[RowKey], dragged: &RowKey, new_order: &[RowKey]) -> Self {
        let (Some(old_index), Some(new_index)) = (
            item_order.iter().position(|r| r == dragged),
            new_order.iter().position(|r| r == dragged),
        ) else {
            return Self::default();
        };

        let displacement = new_index as isize - old_index as isize;
        let ids = dragged.ids();
        let mut order = item_order.to_vec();
        let mut current = old_index;
        let mut steps = Vec::new();

        for _ in 0..displacement.unsigned_abs() {
            let neighbour = if displacement > 0 {
                current + 1
            } else {
                current - 1
            };
            let Some(passed) = order.get(neighbour) else {
                break;
            };
            let passed_ids: Vec<&String> = passed
                .ids()
                .iter()
                .filter(|id| !ids.contains(id))
                .collect();

            if let Some(last) = passed_ids.last() {
                if displacement > 0 {
                    let mut previous = (*last).clone();
                    for id in ids {
                        steps.push(MoveStep::Down {
                            credential_id: id.clone(),
                            new_previous_id: previous,
                        });
                        previous = id.clone();
                    }
                } else {
                    steps.extend(ids.iter().rev().map(|id| MoveStep::Up {
                        credential_id: id.clone(),
                    }));
                }
            }

            order.swap(current, neighbour);
            current = neighbour;
        }

        Self {
            displacement,
            steps,
        }
    }

    /// Checks whether the drop needs no call.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Issues the calls in order, each awaited before the next.
    ///
    /// Stops at the first failure; moves already applied stay applied.
    /// Returns the number of calls made.
    pub async fn execute(&self, client: &dyn AdminClient, user_id: &str) -> AdminClientResult<usize> {
        for (done, step) in self.steps.iter().enumerate() {
            tracing::debug!(user = user_id, step = done + 1, total = self.steps.len(), ?step, "moving credential");
            match step {
                MoveStep::Up { credential_id } => {
                    client.move_credential_up(user_id, credential_id).await?;
                }
                MoveStep::Down {
                    credential_id,
                    new_previous_id,
                } => {
                    client
                        .move_credential_down(user_id, credential_id, new_previous_id)
                        .await?;
                }
            }
        }
        Ok(self.steps.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeAdminClient};

    fn row(id: &str) -> RowKey {
        RowKey::Credential { id: id.to_string() }
    }

    fn group(t: &str, ids: &[&str]) -> RowKey {
        RowKey::Group {
            credential_type: t.to_string(),
            ids: ids.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn up(id: &str) -> MoveStep {
        MoveStep::Up {
            credential_id: id.to_string(),
        }
    }

    fn down(id: &str, previous: &str) -> MoveStep {
        MoveStep::Down {
            credential_id: id.to_string(),
            new_previous_id: previous.to_string(),
        }
    }

    fn moved(items: &[RowKey], item: &RowKey, to: usize) -> Vec<RowKey> {
        super::super::drag::move_item(items, item, to)
    }

    #[test]
    fn two_steps_up_issue_two_up_calls() {
        let items = vec![row("a"), row("b"), row("c")];
        let plan = ReorderPlan::new(&items, &row("c"), &moved(&items, &row("c"), 0));

        assert_eq!(plan.displacement, -2);
        assert_eq!(plan.steps, vec![up("c"), up("c")]);
    }

    #[test]
    fn down_steps_follow_current_occupant() {
        let items = vec![row("a"), row("b"), row("c"), row("d")];
        let plan = ReorderPlan::new(&items, &row("a"), &moved(&items, &row("a"), 3));

        assert_eq!(plan.displacement, 3);
        assert_eq!(
            plan.steps,
            vec![down("a", "b"), down("a", "c"), down("a", "d")]
        );
    }

    #[test]
    fn same_slot_is_noop() {
        let items = vec![row("a"), row("b")];
        let plan = ReorderPlan::new(&items, &row("a"), &items);
        assert!(plan.is_empty());
        assert_eq!(plan.displacement, 0);
    }

    #[test]
    fn unknown_row_is_noop() {
        let items = vec![row("a"), row("b")];
        assert!(ReorderPlan::new(&items, &row("z"), &items).is_empty());
    }

    #[test]
    fn group_moving_down_keeps_members_together() {
        let items = vec![
            group("otp", &["o1", "o2"]),
            group("password", &["p1"]),
            group("webauthn", &["w1", "w2"]),
        ];
        let dragged = items[0].clone();
        let plan = ReorderPlan::new(&items, &dragged, &moved(&items, &dragged, 2));

        assert_eq!(
            plan.steps,
            vec![
                down("o1", "p1"),
                down("o2", "o1"),
                down("o1", "w2"),
                down("o2", "o1"),
            ]
        );
    }

    #[test]
    fn group_moving_up_moves_each_member() {
        let items = vec![group("password", &["p1"]), group("otp", &["o1", "o2"])];
        let dragged = items[1].clone();
        let plan = ReorderPlan::new(&items, &dragged, &moved(&items, &dragged, 0));

        assert_eq!(plan.steps, vec![up("o2"), up("o1")]);
    }

    /// Applies the steps the way the server does: up moves to the front,
    /// down moves to just after the named credential.
    fn replay(server: &[&str], steps: &[MoveStep]) -> Vec<String> {
        let mut order: Vec<String> = server.iter().map(|s| (*s).to_string()).collect();
        for step in steps {
            match step {
                MoveStep::Up { credential_id } => {
                    order.retain(|id| id != credential_id);
                    order.insert(0, credential_id.clone());
                }
                MoveStep::Down {
                    credential_id,
                    new_previous_id,
                } => {
                    order.retain(|id| id != credential_id);
                    let at = order
                        .iter()
                        .position(|id| id == new_previous_id)
                        .map_or(order.len(), |i| i + 1);
                    order.insert(at, credential_id.clone());
                }
            }
        }
        order
    }

    #[test]
    fn group_moving_up_keeps_member_priority_on_server() {
        let items = vec![group("password", &["p1"]), group("otp", &["o1", "o2"])];
        let dragged = items[1].clone();
        let plan = ReorderPlan::new(&items, &dragged, &moved(&items, &dragged, 0));

        assert_eq!(replay(&["p1", "o1", "o2"], &plan.steps), vec!["o1", "o2", "p1"]);
    }

    #[test]
    fn group_moving_down_keeps_member_priority_on_server() {
        let items = vec![
            group("otp", &["o1", "o2"]),
            group("password", &["p1"]),
            group("webauthn", &["w1", "w2"]),
        ];
        let dragged = items[0].clone();
        let plan = ReorderPlan::new(&items, &dragged, &moved(&items, &dragged, 2));

        assert_eq!(
            replay(&["o1", "o2", "p1", "w1", "w2"], &plan.steps),
            vec!["p1", "w1", "w2", "o1", "o2"]
        );
    }

    #[test]
    fn raised_member_moves_ahead_of_other_types() {
        let items = vec![
            group("password", &["p1"]),
            group("otp", &["o1", "o2"]),
            row("o1"),
            row("o2"),
        ];
        let plan = ReorderPlan::new(&items, &row("o2"), &moved(&items, &row("o2"), 2));

        assert_eq!(plan.steps, vec![up("o2")]);
        assert_eq!(replay(&["p1", "o1", "o2"], &plan.steps), vec!["o2", "p1", "o1"]);
    }

    #[test]
    fn passing_own_members_issues_no_call() {
        let items = vec![
            group("otp", &["o1", "o2"]),
            row("o1"),
            row("o2"),
            group("password", &["p1"]),
        ];
        let dragged = items[0].clone();
        let plan = ReorderPlan::new(&items, &dragged, &moved(&items, &dragged, 2));

        assert_eq!(plan.displacement, 2);
        assert!(plan.is_empty());
    }

    #[tokio::test]
    async fn execute_is_sequential_and_stops_on_failure() {
        let fake = FakeAdminClient::default().fail("move", 2);
        let items = vec![row("a"), row("b"), row("c"), row("d")];
        let plan = ReorderPlan::new(&items, &row("a"), &moved(&items, &row("a"), 3));

        let result = plan.execute(&fake, "u1").await;

        assert!(result.is_err());
        assert_eq!(
            fake.calls(),
            vec![
                Call::MoveDown {
                    id: "a".to_string(),
                    previous: "b".to_string()
                },
                Call::MoveDown {
                    id: "a".to_string(),
                    previous: "c".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn execute_reports_call_count() {
        let fake = FakeAdminClient::default();
        let items = vec![row("a"), row("b"), row("c")];
        let plan = ReorderPlan::new(&items, &row("c"), &moved(&items, &row("c"), 0));

        assert_eq!(plan.execute(&fake, "u1").await.unwrap(), 2);
        assert_eq!(
            fake.calls(),
            vec![Call::MoveUp("c".to_string()), Call::MoveUp("c".to_string())]
        );
    }
}
