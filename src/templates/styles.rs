// Card palette: primary is the sale red, secondary the new-release purple.
pub const CARD_CSS: &str = r#"
:root {
  --color-white: hsl(0deg 0% 100%);
  --color-gray-700: hsl(220deg 5% 40%);
  --color-gray-900: hsl(220deg 3% 20%);
  --color-primary: hsl(340deg 65% 47%);
  --color-secondary: hsl(240deg 60% 63%);
  --weight-medium: 500;
  --weight-bold: 700;
}

.shoe-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 32px;
  list-style: none;
  padding: 0;
}

.shoe-grid > li {
  flex: 1 1 275px;
}

.shoe-card {
  text-decoration: none;
  color: inherit;
}

.shoe-card__image {
  position: relative;
}

.shoe-card__image img {
  width: 100%;
  border-radius: 16px 16px 4px 4px;
}

.shoe-card__row {
  position: relative;
  font-size: 1rem;
}

.shoe-card__name {
  margin-top: 12px;
  font-weight: var(--weight-medium);
  color: var(--color-gray-900);
}

.shoe-card__prices {
  position: absolute;
  top: 0;
  right: 0;
}

.shoe-card__price--struck {
  color: var(--color-gray-700);
  text-decoration: line-through;
}

.shoe-card__sale-price {
  font-weight: var(--weight-medium);
  color: var(--color-primary);
}

.shoe-card__colors {
  color: var(--color-gray-700);
}

.shoe-card__badge {
  position: absolute;
  top: 12px;
  right: -4px;
  color: var(--color-white);
  font-size: 0.875rem;
  font-weight: var(--weight-bold);
  height: 32px;
  line-height: 32px;
  padding: 0 10px;
  border-radius: 2px;
}

.shoe-card__badge--sale {
  background-color: var(--color-primary);
}

.shoe-card__badge--new {
  background-color: var(--color-secondary);
}
"#;
