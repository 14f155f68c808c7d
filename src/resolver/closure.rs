//! Prerequisite closure over the component graph.

use std::collections::HashMap;

use crate::error::{MyUiError, Result};
use crate::registry::{ComponentDescriptor, Registry};

#[derive(Clone, Copy, PartialEq)]
enum State {
    Unvisited,
    Visiting,
    Visited,
}

/// Collect the components needed by `roots`, prerequisites first.
///
/// Every component appears once, after all of its own prerequisites. Unknown
/// names fail with `NotFound` and cycles with `CircularDependency`, so a
/// registry that skipped its integrity pass still cannot loop forever.
pub fn component_closure<'a>(
    registry: &'a Registry,
    roots: &[String],
) -> Result<Vec<&'a ComponentDescriptor>> {
    let mut state: HashMap<&str, State> = HashMap::new();
    let mut path: Vec<String> = Vec::new();
    let mut order = Vec::new();

    fn visit<'a>(
        name: &str,
        registry: &'a Registry,
        state: &mut HashMap<&'a str, State>,
        path: &mut Vec<String>,
        order: &mut Vec<&'a ComponentDescriptor>,
    ) -> Result<()> {
        let component = registry.lookup_component(name)?;
        match state
            .get(component.name.as_str())
            .copied()
            .unwrap_or(State::Unvisited)
        {
            State::Visited => return Ok(()),
            State::Visiting => {
                let start = path.iter().position(|s| s == name).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(name.to_string());
                return Err(MyUiError::CircularDependency {
                    cycle: cycle.join(" -> "),
                });
            }
            State::Unvisited => {}
        }

        state.insert(component.name.as_str(), State::Visiting);
        path.push(component.name.clone());

        for prerequisite in &component.prerequisites {
            visit(prerequisite, registry, state, path, order)?;
        }

        path.pop();
        state.insert(component.name.as_str(), State::Visited);
        order.push(component);
        Ok(())
    }

    for root in roots {
        visit(root, registry, &mut state, &mut path, &mut order)?;
    }

    Ok(order)
}

/// Find a prerequisite cycle anywhere in the registry.
///
/// Returns the cycle path with the first node repeated at the end, e.g.
/// `["a", "b", "a"]`. Dangling references are ignored here.
pub fn find_cycle(registry: &Registry) -> Option<Vec<String>> {
    let mut state: HashMap<&str, State> = registry
        .components()
        .iter()
        .map(|c| (c.name.as_str(), State::Unvisited))
        .collect();

    let mut path: Vec<String> = Vec::new();

    fn dfs<'a>(
        node: &'a str,
        registry: &'a Registry,
        state: &mut HashMap<&'a str, State>,
        path: &mut Vec<String>,
    ) -> Option<Vec<String>> {
        state.insert(node, State::Visiting);
        path.push(node.to_string());

        if let Ok(component) = registry.lookup_component(node) {
            for dep in &component.prerequisites {
                match state.get(dep.as_str()) {
                    Some(State::Visiting) => {
                        let start = path.iter().position(|s| s == dep).unwrap_or(0);
                        let mut cycle: Vec<String> = path[start..].to_vec();
                        cycle.push(dep.clone());
                        return Some(cycle);
                    }
                    Some(State::Unvisited) => {
                        if let Some(cycle) = dfs(dep, registry, state, path) {
                            return Some(cycle);
                        }
                    }
                    Some(State::Visited) | None => {}
                }
            }
        }

        path.pop();
        state.insert(node, State::Visited);
        None
    }

    for component in registry.components() {
        if state.get(component.name.as_str()) == Some(&State::Unvisited) {
            if let Some(cycle) = dfs(&component.name, registry, &mut state, &mut path) {
                return Some(cycle);
            }
        }
    }

    None
}
