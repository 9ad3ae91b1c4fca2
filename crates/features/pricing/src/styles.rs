/// Stylesheet for the pricing page. Hosts inject it into the document head;
/// components only toggle the classes from `flexiforms_domain::constants`.
pub const STYLESHEET: &str = r"
.container {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
    padding: 3rem 1rem;
    font-family: system-ui, sans-serif;
}

.pricing-card {
    display: flex;
    flex-direction: column;
    width: 18rem;
    padding: 2rem;
    border: 1px solid #d9dde3;
    border-radius: 12px;
    background: #ffffff;
}

.pricing-card.featured {
    border: 2px solid #4f46e5;
    transform: scale(1.05);
}

.pricing-card .price {
    font-size: 1.75rem;
    font-weight: 700;
    margin: 0.5rem 0 1.5rem;
}

.pricing-card ul {
    flex: 1;
    padding-left: 1.25rem;
    line-height: 1.8;
}

.pricing-card .cta {
    padding: 0.75rem;
    border: none;
    border-radius: 8px;
    background: #4f46e5;
    color: #ffffff;
    cursor: pointer;
}
";
