//! React component, hook, store and feature templates.

pub const COMPONENT_BASIC: &str = r#"import type { ReactNode } from 'react';

export interface {{NAME}}Props {
  children?: ReactNode;
}

export const {{NAME}} = ({ children }: {{NAME}}Props) => {
  return <div className="{{NAME_KEBAB}}">{children}</div>;
};
"#;

pub const COMPONENT_FULL: &str = r#"import { useState, type ReactNode } from 'react';

export interface {{NAME}}Props {
  title?: string;
  children?: ReactNode;
  onToggle?: (open: boolean) => void;
}

export const {{NAME}} = ({ title = '{{NAME}}', children, onToggle }: {{NAME}}Props) => {
  const [open, setOpen] = useState(true);

  const handleToggle = () => {
    setOpen((prev) => !prev);
    onToggle?.(!open);
  };

  return (
    <section className="{{NAME_KEBAB}}">
      <header className="{{NAME_KEBAB}}__header">
        <h2>{title}</h2>
        <button type="button" onClick={handleToggle} aria-expanded={open}>
          {open ? 'Hide' : 'Show'}
        </button>
      </header>
      {open && <div className="{{NAME_KEBAB}}__body">{children}</div>}
    </section>
  );
};
"#;

pub const COMPONENT_TEST: &str = r#"import { render, screen } from '@testing-library/react';
import { describe, expect, it } from 'vitest';

import { {{NAME}} } from './{{NAME}}';

describe('{{NAME}}', () => {
  it('renders its children', () => {
    render(<{{NAME}}>{{NAME_LOWER}} content</{{NAME}}>);
    expect(screen.getByText('{{NAME_LOWER}} content')).toBeInTheDocument();
  });
});
"#;

pub const COMPONENT_STORYBOOK: &str = r#"import type { Meta, StoryObj } from '@storybook/react';

import { {{NAME}} } from './{{NAME}}';

const meta: Meta<typeof {{NAME}}> = {
  title: 'Components/{{NAME}}',
  component: {{NAME}},
};

export default meta;

type Story = StoryObj<typeof {{NAME}}>;

export const Default: Story = {
  args: {
    children: '{{NAME}}',
  },
};
"#;

pub const APP_HOOK: &str = r#"import { useCallback, useState } from 'react';

export const use{{NAME}} = <T = unknown>(initial: T | null = null) => {
  const [{{NAME_CAMEL}}, set{{NAME}}] = useState<T | null>(initial);

  const reset = useCallback(() => set{{NAME}}(initial), [initial]);

  return { {{NAME_CAMEL}}, set{{NAME}}, reset };
};
"#;

pub const FEATURE_HOOK: &str = r#"import { useEffect, useState } from 'react';

export const use{{NAME}} = <T = unknown>(load: () => Promise<T>) => {
  const [data, setData] = useState<T | null>(null);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState<Error | null>(null);

  useEffect(() => {
    let active = true;
    load()
      .then((result) => active && setData(result))
      .catch((err: Error) => active && setError(err))
      .finally(() => active && setLoading(false));
    return () => {
      active = false;
    };
  }, [load]);

  return { data, loading, error };
};
"#;

pub const APP_STORE: &str = r#"import { create } from 'zustand';

type {{NAME}}State = {
  {{NAME_CAMEL}}: unknown[];
  set{{NAME}}: (items: unknown[]) => void;
  reset: () => void;
};

export const use{{NAME}}Store = create<{{NAME}}State>((set) => ({
  {{NAME_CAMEL}}: [],
  set{{NAME}}: (items) => set({ {{NAME_CAMEL}}: items }),
  reset: () => set({ {{NAME_CAMEL}}: [] }),
}));
"#;

pub const FEATURE_PAGE: &str = r#"export const {{NAME}}Page = () => {
  return (
    <section className="{{NAME_KEBAB}}-page">
      <h1>{{NAME}}</h1>
    </section>
  );
};
"#;

pub const FEATURE_ROUTES_INDIVIDUAL: &str = r#"import { Navigate, Route, Routes } from 'react-router-dom';

import { {{NAME}}Page } from '../pages/{{NAME}}Page';

export const {{NAME}}Routes = () => {
  return (
    <Routes>
      <Route path="" element={<{{NAME}}Page />} />
      <Route path="*" element={<Navigate to="." />} />
    </Routes>
  );
};
"#;

pub const INDEX_BASIC: &str = "export { {{NAME}} } from './{{NAME}}';\n";

pub const INDEX_HOOK_INDIVIDUAL: &str = "export { use{{NAME}} } from './use{{NAME}}';\n";

pub const INDEX_TYPES: &str = r#"export interface {{NAME}} {
  id: number;
  createdAt: string;
}

export type {{NAME}}List = {{NAME}}[];
"#;
