use pathfinder_core::graph::NodeId;

/// Node given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

/// Edge given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Option<f64>,
}

/// Parse node id from string
pub fn parse_node_id(s: &str) -> std::result::Result<NodeId, String> {
    s.parse::<NodeId>().map_err(|e| e.to_string())
}

fn parse_number(s: &str, what: &str) -> std::result::Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid {}: {}", what, s))
}

/// Parse `ID:X,Y` or `ID:X,Y:LABEL`
pub fn parse_node_spec(s: &str) -> std::result::Result<NodeSpec, String> {
    let mut parts = s.splitn(3, ':');
    let id = parse_node_id(parts.next().unwrap_or_default())?;
    let position = parts
        .next()
        .ok_or_else(|| format!("expected ID:X,Y[:LABEL], got '{}'", s))?;
    let (x, y) = position
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y position, got '{}'", position))?;
    let label = parts
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string);

    Ok(NodeSpec {
        id,
        x: parse_number(x, "x coordinate")?,
        y: parse_number(y, "y coordinate")?,
        label,
    })
}

/// Parse `FROM:TO` or `FROM:TO:WEIGHT`
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (from, to, None),
        [from, to, weight] => (from, to, Some(parse_number(weight, "edge weight")?)),
        _ => return Err(format!("expected FROM:TO[:WEIGHT], got '{}'", s)),
    };

    Ok(EdgeSpec {
        from: parse_node_id(from)?,
        to: parse_node_id(to)?,
        weight,
    })
}
